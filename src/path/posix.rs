//! POSIX flavored operations as free functions. See [`Flavor`] for the details of each one.

use crate::path::{Flavor, ParsedPath, WorkingDirectory};

pub const SEP: char = Flavor::Posix.sep();
pub const DELIMITER: char = Flavor::Posix.delimiter();

pub fn normalize(path: &str) -> String {
    Flavor::Posix.normalize(path)
}

pub fn dirname(path: &str) -> String {
    Flavor::Posix.dirname(path)
}

pub fn basename(path: &str, ext: Option<&str>) -> String {
    Flavor::Posix.basename(path, ext)
}

pub fn extname(path: &str) -> String {
    Flavor::Posix.extname(path)
}

pub fn join<I: IntoIterator<Item = S>, S: AsRef<str>>(parts: I) -> String {
    Flavor::Posix.join(parts)
}

pub fn resolve<I: IntoIterator<Item = S>, S: AsRef<str>>(parts: I, cwd: &WorkingDirectory) -> String {
    Flavor::Posix.resolve(parts, cwd)
}

pub fn relative(from: &str, to: &str, cwd: &WorkingDirectory) -> String {
    Flavor::Posix.relative(from, to, cwd)
}

pub fn is_absolute(path: &str) -> bool {
    Flavor::Posix.is_absolute(path)
}

pub fn parse(path: &str) -> ParsedPath {
    Flavor::Posix.parse(path)
}

pub fn format(parsed: &ParsedPath) -> String {
    Flavor::Posix.format(parsed)
}
