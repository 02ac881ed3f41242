//! Core operations.
//!
//! This module contains the business logic for propgen,
//! separated from CLI argument parsing and output rendering.

mod generate;

pub use generate::{GenerateOptions, generate};
