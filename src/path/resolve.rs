use tracing::{debug, trace};

use crate::path::iter::{self, Segments};
use crate::path::root::Root;
use crate::path::{Flavor, WorkingDirectory};

impl Flavor {
    /// Resolves a sequence of paths into an absolute, normalized path.
    ///
    /// Parts are read right to left and prepended until one of them is absolute; anything to the
    /// left of that part is ignored. If none is, `cwd` supplies the anchor, or the flavor's root when
    /// `cwd` belongs to another flavor. On Windows, an absolute
    /// part without a drive keeps looking left for one, skipping parts on other drives, and a
    /// path that only names a drive is anchored at that drive's root.
    ///
    /// ```
    /// # use pathops::path::{Flavor, WorkingDirectory};
    /// let cwd = WorkingDirectory::new(Flavor::Posix, "/x/y").unwrap();
    /// assert_eq!(Flavor::Posix.resolve(["a", "/b"], &cwd), "/b");
    /// assert_eq!(Flavor::Posix.resolve(["a", "b/../c"], &cwd), "/x/y/a/c");
    /// ```
    pub fn resolve<I, S>(self, parts: I, cwd: &WorkingDirectory) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // A foreign working directory can't anchor anything, so fall back to the plain root.
        let anchor = if cwd.flavor() == self {
            cwd.as_str()
        } else {
            debug!(flavor = %self, cwd = cwd.as_str(), "working directory of another flavor, anchoring at the root");
            self.root_str()
        };

        let parts: Vec<S> = parts.into_iter().collect();
        let candidates = parts.iter().map(|part| part.as_ref()).rev().chain([anchor]);

        let mut device = "";
        let mut rooted = false;
        // Right to left, reversed when joined below.
        let mut tails: Vec<&str> = Vec::new();

        for part in candidates {
            if part.is_empty() {
                continue;
            }

            let (root, rest) = Root::split(self, part);
            if !root.device.is_empty() {
                if device.is_empty() {
                    device = root.device;
                } else if !self.same_segment(device, root.device) {
                    trace!(part, device, "skipping part on another drive");
                    continue;
                }
            }

            if !rooted {
                tails.push(rest);
                if root.rooted {
                    trace!(part, "resolve re-rooted");
                    rooted = true;
                }
            }

            if rooted && (!self.has_drives() || !device.is_empty()) {
                break;
            }
        }

        let mut joined = String::from(device);
        joined.push(self.sep());
        iter::push_joined(&mut joined, self, tails.into_iter().rev().filter(|tail| !tail.is_empty()));

        self.normalize(&joined)
    }

    /// The path that leads from `from` to `to`, both resolved against `cwd` first.
    ///
    /// Identical locations give `.`. On Windows, paths on different drives have no relative path
    /// between them, so the resolved `to` is returned as is.
    ///
    /// ```
    /// # use pathops::path::{Flavor, WorkingDirectory};
    /// let cwd = WorkingDirectory::new(Flavor::Posix, "/x/y").unwrap();
    /// assert_eq!(Flavor::Posix.relative("../..", "a", &cwd), "x/y/a");
    /// assert_eq!(Flavor::Posix.relative("/a/b/c", "/a/d", &cwd), "../../d");
    /// ```
    pub fn relative(self, from: &str, to: &str, cwd: &WorkingDirectory) -> String {
        let from = self.resolve([from], cwd);
        let to = self.resolve([to], cwd);

        let (from_root, from_rest) = Root::split(self, &from);
        let (to_root, to_rest) = Root::split(self, &to);
        if !self.same_segment(from_root.device, to_root.device) {
            trace!(from = %from, to = %to, "no relative path across drives");
            return to;
        }

        let from_segments: Vec<&str> = Segments::new(self, from_rest).map(|s| s.as_str()).collect();
        let to_segments: Vec<&str> = Segments::new(self, to_rest).map(|s| s.as_str()).collect();

        let common = from_segments.iter()
            .zip(&to_segments)
            .take_while(|(a, b)| self.same_segment(a, b))
            .count();

        let ups = (common..from_segments.len()).map(|_| "..");
        let downs = to_segments[common..].iter().copied();

        let mut out = String::new();
        iter::push_joined(&mut out, self, ups.chain(downs));
        if out.is_empty() {
            out.push('.');
        }
        out
    }
}
