use crate::path::root::Root;
use crate::path::Flavor;

/// A path broken into the pieces [`Flavor::format`] puts back together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    /// The root as written, e.g. `/`, `C:\` or `C:`. Empty for relative paths.
    pub root: String,
    /// Everything before the final segment.
    pub dir: String,
    /// The final segment, `name` followed by `ext`.
    pub base: String,
    /// The extension, including its leading `.`.
    pub ext: String,
    pub name: String,
}

impl Flavor {
    /// The final segment of `path` with trailing separators ignored, so `a/b/` has the basename
    /// `b`. If `ext` is a proper suffix of that segment, it is removed.
    pub fn basename(self, path: &str, ext: Option<&str>) -> String {
        let base = self.final_segment(path);

        match ext {
            Some(ext) if !ext.is_empty() && base.len() > ext.len() && base.ends_with(ext) => {
                base[..base.len() - ext.len()].to_owned()
            },
            _ => base.to_owned(),
        }
    }

    /// Everything before the final segment of `path`, without the separators leading up to it.
    ///
    /// A path with nothing before its final segment has the dirname `.`, or its root if it has
    /// one.
    pub fn dirname(self, path: &str) -> String {
        let (root, rest) = Root::split(self, path);
        let trimmed = self.trim_end_seps(rest);

        match self.rfind_sep(trimmed) {
            Some(index) => {
                let head = self.trim_end_seps(&trimmed[..index]);
                // rest never starts with a separator, so head can't be empty.
                let end = path.len() - rest.len() + head.len();
                path[..end].to_owned()
            },
            None if !root.is_empty() => root.text.to_owned(),
            None => String::from("."),
        }
    }

    /// The extension of the final segment, from its last `.` onwards.
    ///
    /// A leading dot marks a hidden file rather than an extension, so `.profile` has none.
    pub fn extname(self, path: &str) -> String {
        extension(self.final_segment(path)).to_owned()
    }

    pub fn parse(self, path: &str) -> ParsedPath {
        let (root, rest) = Root::split(self, path);
        let base = self.final_segment(path);
        let ext = extension(base);

        let dir = if self.rfind_sep(self.trim_end_seps(rest)).is_some() {
            self.dirname(path)
        } else {
            root.text.to_owned()
        };

        ParsedPath {
            root: root.text.to_owned(),
            dir,
            base: base.to_owned(),
            ext: ext.to_owned(),
            name: base[..base.len() - ext.len()].to_owned(),
        }
    }

    /// The inverse of [`parse`](Flavor::parse). `dir` wins over `root` and `base` wins over
    /// `name` + `ext`.
    pub fn format(self, parsed: &ParsedPath) -> String {
        let dir = if parsed.dir.is_empty() { &parsed.root } else { &parsed.dir };

        let mut out = dir.clone();
        if !dir.is_empty() && *dir != parsed.root {
            out.push(self.sep());
        }

        if parsed.base.is_empty() {
            out.push_str(&parsed.name);
            if !parsed.ext.is_empty() && !parsed.ext.starts_with('.') {
                out.push('.');
            }
            out.push_str(&parsed.ext);
        } else {
            out.push_str(&parsed.base);
        }
        out
    }

    fn final_segment(self, path: &str) -> &str {
        let (_, rest) = Root::split(self, path);
        let trimmed = self.trim_end_seps(rest);

        match self.rfind_sep(trimmed) {
            // Separators are ASCII, so index + 1 is a char boundary.
            Some(index) => &trimmed[index + 1..],
            None => trimmed,
        }
    }
}

fn extension(base: &str) -> &str {
    if base == ".." {
        return "";
    }

    match base.rfind('.') {
        Some(0) | None => "",
        Some(index) => &base[index..],
    }
}
