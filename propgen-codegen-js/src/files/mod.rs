//! JavaScript file generators.

mod component;

pub use component::{ComponentFile, DEFAULT_EXTENSION};
