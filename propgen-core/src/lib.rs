//! Core utilities for the propgen component generator.
//!
//! This crate provides the file emitting primitives shared by the
//! code generators and the command-line tool.

mod error;
mod file;

pub use error::WriteError;
pub use file::GeneratedFile;
