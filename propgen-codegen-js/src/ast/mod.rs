//! JavaScript AST builders for imports, consts, object literals and exports.
//!
//! These provide a high-level API for constructing JavaScript syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod exports;
mod imports;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::{JsObject, Member, PropertyValue};
