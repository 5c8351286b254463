//! Windows flavored operations as free functions. See [`Flavor`] for the details of each one.
//!
//! Input may use `/` or `\` as separators, output always uses `\`. Only a drive designator at the
//! very start of a path is recognized: [`join`] treats one in a later part as plain text.
//!
//! ```
//! # use pathops::path::win32;
//! assert_eq!(win32::join(["C:\\a", "D:\\b"]), "C:\\a\\D:\\b");
//! ```

use crate::path::{Flavor, ParsedPath, WorkingDirectory};

pub const SEP: char = Flavor::Win32.sep();
pub const DELIMITER: char = Flavor::Win32.delimiter();

pub fn normalize(path: &str) -> String {
    Flavor::Win32.normalize(path)
}

pub fn dirname(path: &str) -> String {
    Flavor::Win32.dirname(path)
}

pub fn basename(path: &str, ext: Option<&str>) -> String {
    Flavor::Win32.basename(path, ext)
}

pub fn extname(path: &str) -> String {
    Flavor::Win32.extname(path)
}

pub fn join<I: IntoIterator<Item = S>, S: AsRef<str>>(parts: I) -> String {
    Flavor::Win32.join(parts)
}

pub fn resolve<I: IntoIterator<Item = S>, S: AsRef<str>>(parts: I, cwd: &WorkingDirectory) -> String {
    Flavor::Win32.resolve(parts, cwd)
}

pub fn relative(from: &str, to: &str, cwd: &WorkingDirectory) -> String {
    Flavor::Win32.relative(from, to, cwd)
}

pub fn is_absolute(path: &str) -> bool {
    Flavor::Win32.is_absolute(path)
}

pub fn parse(path: &str) -> ParsedPath {
    Flavor::Win32.parse(path)
}

pub fn format(parsed: &ParsedPath) -> String {
    Flavor::Win32.format(parsed)
}
