use crate::path::{CwdError, Flavor, ParsedPath, WorkingDirectory};

/// A flavor bound to a working directory, so that [`resolve`](PathOps::resolve) and
/// [`relative`](PathOps::relative) read like the rest of the operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOps {
    cwd: WorkingDirectory,
}

impl PathOps {
    pub fn new(flavor: Flavor, cwd: &str) -> Result<PathOps, CwdError> {
        Ok(PathOps::with_cwd(WorkingDirectory::new(flavor, cwd)?))
    }

    pub const fn with_cwd(cwd: WorkingDirectory) -> PathOps {
        PathOps {
            cwd,
        }
    }

    /// Native flavor, anchored at the current directory of this process.
    pub fn from_process() -> Result<PathOps, CwdError> {
        Ok(PathOps::with_cwd(WorkingDirectory::from_process()?))
    }

    pub const fn flavor(&self) -> Flavor {
        self.cwd.flavor()
    }

    pub const fn cwd(&self) -> &WorkingDirectory {
        &self.cwd
    }

    pub fn normalize(&self, path: &str) -> String {
        self.flavor().normalize(path)
    }

    pub fn dirname(&self, path: &str) -> String {
        self.flavor().dirname(path)
    }

    pub fn basename(&self, path: &str, ext: Option<&str>) -> String {
        self.flavor().basename(path, ext)
    }

    pub fn extname(&self, path: &str) -> String {
        self.flavor().extname(path)
    }

    pub fn join<I: IntoIterator<Item = S>, S: AsRef<str>>(&self, parts: I) -> String {
        self.flavor().join(parts)
    }

    pub fn resolve<I: IntoIterator<Item = S>, S: AsRef<str>>(&self, parts: I) -> String {
        self.flavor().resolve(parts, &self.cwd)
    }

    pub fn relative(&self, from: &str, to: &str) -> String {
        self.flavor().relative(from, to, &self.cwd)
    }

    pub fn is_absolute(&self, path: &str) -> bool {
        self.flavor().is_absolute(path)
    }

    pub fn parse(&self, path: &str) -> ParsedPath {
        self.flavor().parse(path)
    }

    pub fn format(&self, parsed: &ParsedPath) -> String {
        self.flavor().format(parsed)
    }
}
