use crate::path::iter::{self, Segments};
use crate::path::root::Root;
use crate::path::Flavor;

impl Flavor {
    /// Lexically cleans up `path`.
    ///
    /// Repeated separators collapse, `.` segments disappear and `..` removes the segment before
    /// it. A trailing separator survives, unless all that is left is the root. The empty path
    /// normalizes to `.`.
    ///
    /// ```
    /// # use pathops::path::Flavor;
    /// assert_eq!(Flavor::Posix.normalize("//"), "/");
    /// assert_eq!(Flavor::Posix.normalize("a/./b/../c/"), "a/c/");
    /// assert_eq!(Flavor::Win32.normalize("C:/a//b"), "C:\\a\\b");
    /// ```
    pub fn normalize(self, path: &str) -> String {
        if path.is_empty() {
            return String::from(".");
        }

        let (root, rest) = Root::split(self, path);
        let trailing = self.ends_with_sep(rest);
        let segments = iter::collapse(Segments::new(self, rest), root.rooted);

        let mut out = root.render(self);
        if segments.is_empty() {
            // The root on its own needs no body, but "C:" or "" do.
            if !root.rooted {
                out.push('.');
                if trailing {
                    out.push(self.sep());
                }
            }
            return out;
        }

        // A leading "C:" left over after ".." would read back as a drive designator.
        if root.is_empty() && segments.first().is_some_and(|first| self.is_drive(first)) {
            out.push('.');
            out.push(self.sep());
        }

        iter::push_joined(&mut out, self, segments);
        if trailing {
            out.push(self.sep());
        }
        out
    }

    /// Concatenates the non-empty `parts` with the separator and normalizes the result.
    ///
    /// Unlike [`resolve`](Flavor::resolve), joining never re-roots: a later part that starts with
    /// a separator (or, on Windows, a drive designator) is just more text.
    ///
    /// ```
    /// # use pathops::path::Flavor;
    /// assert_eq!(Flavor::Posix.join(["a", "/b"]), "a/b");
    /// assert_eq!(Flavor::Win32.join(["C:\\a", "D:\\b"]), "C:\\a\\D:\\b");
    /// ```
    pub fn join<I, S>(self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for part in parts {
            let part = part.as_ref();
            if part.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(self.sep());
            }
            joined.push_str(part);
        }

        if joined.is_empty() {
            return String::from(".");
        }
        self.normalize(&joined)
    }
}
