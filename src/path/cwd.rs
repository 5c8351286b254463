use std::env;
use std::fmt::{self, Display, Formatter};

use crate::path::{CwdError, CwdUnavailableError, Flavor, NonUnicodeError, NotAbsoluteError};

/// The absolute path that relative inputs to [`resolve`](Flavor::resolve) and
/// [`relative`](Flavor::relative) are anchored to.
///
/// # Invariants
/// - The path is absolute for its flavor.
/// - The path is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkingDirectory {
    flavor: Flavor,
    inner: String,
}

impl WorkingDirectory {
    pub fn new(flavor: Flavor, path: impl Into<String>) -> Result<WorkingDirectory, CwdError> {
        let path = path.into();
        if !flavor.is_absolute(&path) {
            return Err(NotAbsoluteError { path }.into());
        }

        Ok(WorkingDirectory {
            flavor,
            inner: flavor.normalize(&path),
        })
    }

    /// Captures the current directory of this process, in the native flavor.
    pub fn from_process() -> Result<WorkingDirectory, CwdError> {
        let dir = env::current_dir().map_err(|source| CwdUnavailableError { source })?;
        let dir = dir.into_os_string().into_string().map_err(|_| NonUnicodeError)?;
        WorkingDirectory::new(Flavor::native(), dir)
    }

    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for WorkingDirectory {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Display for WorkingDirectory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
