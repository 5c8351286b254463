//! Lexical path manipulation for POSIX and Windows paths.
//!
//! # Purpose
//! This crate reimplements the string-level path helpers that most scripting runtimes ship with
//! (`normalize`, `dirname`, `basename`, `extname`, `join`, `resolve`, `relative` and friends) for
//! two path dialects, independent of the platform it runs on. A Linux build can answer what a
//! Windows path joins to and vice versa.
//!
//! Nothing here touches the file system. Paths are never canonicalized, symlinks are never
//! followed and `..` is resolved purely by dropping the preceding segment.
//!
//! # Working Directory
//! [`resolve`](path::Flavor::resolve) and [`relative`](path::Flavor::relative) need an absolute
//! anchor. Instead of reading the process's current directory behind the caller's back, both take
//! a [`WorkingDirectory`](path::WorkingDirectory) explicitly, so their output only changes when the
//! caller's input does.
//!
//! # Error Handling
//! Every path operation is total: any `&str` goes in, a `String` comes out. The only fallible
//! pieces are at the edges (parsing a [`Flavor`](path::Flavor) from a name, or building a
//! [`WorkingDirectory`](path::WorkingDirectory)), and those use small strongly typed errors
//! combined into enums for static dispatch.
//!
//! # Dependencies
//! Error types are derived with `derive_more`. Decisions that are easy to get wrong (re-rooting in
//! `resolve`, drive skipping on Windows) are reported through `tracing` at trace level, so the
//! library stays silent unless a subscriber asks for it.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod path;
