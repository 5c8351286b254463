use crate::path::Flavor;

/// The leading part of a path that anchors it: an optional drive designator followed by an
/// optional separator.
///
/// # Invariants
/// - `device` is empty unless the flavor has drives, otherwise it is `<ASCII letter>:`.
/// - `text` is `device` followed by at most one separator, exactly as written in the source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Root<'a> {
    pub device: &'a str,
    pub rooted: bool,
    pub text: &'a str,
}

impl<'a> Root<'a> {
    /// Splits `path` into its root and the text after it. Every separator directly following the
    /// root is consumed, so the remainder never starts with one.
    pub fn split(flavor: Flavor, path: &'a str) -> (Root<'a>, &'a str) {
        let device_len = if flavor.is_drive(path) { 2 } else { 0 };

        let after_device = &path[device_len..];
        let rest = after_device.trim_start_matches(|ch| flavor.is_sep(ch));
        let rooted = rest.len() < after_device.len();

        let root = Root {
            device: &path[..device_len],
            rooted,
            text: &path[..device_len + usize::from(rooted)],
        };
        (root, rest)
    }

    pub const fn is_empty(&self) -> bool {
        self.device.is_empty() && !self.rooted
    }

    /// The root with its separator replaced by the flavor's output separator.
    pub fn render(&self, flavor: Flavor) -> String {
        let mut out = String::from(self.device);
        if self.rooted {
            out.push(flavor.sep());
        }
        out
    }
}

impl Flavor {
    /// Whether `path` is anchored without the help of a working directory.
    ///
    /// A Windows path with a drive but no separator (`C:foo`) is relative to that drive's current
    /// directory, so it is not absolute. A leading separator without a drive is.
    pub fn is_absolute(self, path: &str) -> bool {
        Root::split(self, path).0.rooted
    }
}
