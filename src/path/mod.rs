//! Lexical path operations over `&str`, parameterized by a [`Flavor`].
//!
//! The operations live on [`Flavor`] itself. [`posix`] and [`win32`] wrap them as free functions
//! for callers that only ever deal with one dialect, and [`PathOps`] binds a flavor to a
//! [`WorkingDirectory`].

pub mod posix;
pub mod win32;

mod cwd;
mod error;
mod flavor;
mod iter;
mod name;
mod normalize;
mod ops;
mod resolve;
mod root;

pub use cwd::*;
pub use error::*;
pub use flavor::*;
pub use iter::{Segment, Segments};
pub use name::*;
pub use ops::*;
