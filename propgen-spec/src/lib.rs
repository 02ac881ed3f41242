//! Command-line token parsing for the propgen component generator.
//!
//! Turns `name:type:required` prop tokens and `name:value` default tokens
//! into a [`ComponentSpec`], reporting malformed tokens as [`miette`]
//! diagnostics.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod component;
mod defaults;
mod error;
mod literal;
mod property;

pub use component::ComponentSpec;
pub use defaults::{DefaultValues, parse_defaults};
pub use error::{Error, Result};
pub use literal::{Literal, NULL_FUNC};
pub use property::{PropertySpec, parse_properties};
