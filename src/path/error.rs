use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error)]
#[display("unknown path flavor {name:?}, expected \"posix\" or \"win32\"")]
pub struct UnknownFlavorError {
    pub name: String,
}

#[derive(Debug, Display, Error)]
#[display("working directory {path:?} is not absolute")]
pub struct NotAbsoluteError {
    pub path: String,
}

#[derive(Debug, Display, Error)]
#[display("working directory is not valid unicode")]
pub struct NonUnicodeError;

#[derive(Debug, Display, Error)]
#[display("unable to read the process working directory")]
pub struct CwdUnavailableError {
    pub source: std::io::Error,
}

#[derive(Debug, Display, From, Error)]
pub enum CwdError {
    NotAbsolute(NotAbsoluteError),
    NonUnicode(NonUnicodeError),
    Unavailable(CwdUnavailableError),
}
