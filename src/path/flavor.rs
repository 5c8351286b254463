use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::path::error::UnknownFlavorError;

/// The path dialect an operation follows.
///
/// A flavor is a small descriptor rather than a trait: every algorithm in this module is written
/// once and asks the flavor which characters separate segments, which one to emit, and whether a
/// leading drive designator (`C:`) means anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `/` separated paths, rooted at a single leading `/`.
    Posix,
    /// `\` separated paths that also accept `/` on input, with optional `<letter>:` drives.
    Win32,
}

impl Flavor {
    /// The flavor of the platform this crate was compiled for.
    pub const fn native() -> Flavor {
        if cfg!(windows) {
            Flavor::Win32
        } else {
            Flavor::Posix
        }
    }

    /// The separator written to output.
    pub const fn sep(self) -> char {
        match self {
            Flavor::Posix => '/',
            Flavor::Win32 => '\\',
        }
    }

    /// The delimiter between entries of a `PATH`-style list.
    pub const fn delimiter(self) -> char {
        match self {
            Flavor::Posix => ':',
            Flavor::Win32 => ';',
        }
    }

    /// Whether `ch` separates segments on input.
    pub const fn is_sep(self, ch: char) -> bool {
        match self {
            Flavor::Posix => ch == '/',
            Flavor::Win32 => ch == '/' || ch == '\\',
        }
    }

    pub const fn has_drives(self) -> bool {
        matches!(self, Flavor::Win32)
    }

    /// Whether `value` starts with a drive designator.
    pub(crate) fn is_drive(self, value: &str) -> bool {
        self.has_drives() && matches!(value.as_bytes(), [letter, b':', ..] if letter.is_ascii_alphabetic())
    }

    /// The root of a path with no drive, as written to output.
    pub(crate) const fn root_str(self) -> &'static str {
        match self {
            Flavor::Posix => "/",
            Flavor::Win32 => "\\",
        }
    }

    /// Compares two segments (or drive designators) the way the flavor's file systems would.
    pub fn same_segment(self, a: &str, b: &str) -> bool {
        match self {
            Flavor::Posix => a == b,
            Flavor::Win32 => a.eq_ignore_ascii_case(b),
        }
    }

    pub(crate) fn trim_end_seps(self, value: &str) -> &str {
        value.trim_end_matches(|ch| self.is_sep(ch))
    }

    pub(crate) fn ends_with_sep(self, value: &str) -> bool {
        value.chars().next_back().is_some_and(|ch| self.is_sep(ch))
    }

    pub(crate) fn rfind_sep(self, value: &str) -> Option<usize> {
        value.rfind(|ch| self.is_sep(ch))
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Posix => write!(f, "posix"),
            Flavor::Win32 => write!(f, "win32"),
        }
    }
}

impl FromStr for Flavor {
    type Err = UnknownFlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" => Ok(Flavor::Posix),
            "win32" | "windows" => Ok(Flavor::Win32),
            _ => Err(UnknownFlavorError { name: s.to_owned() }),
        }
    }
}
