//! JavaScript component generator for propgen.
//!
//! This crate renders a parsed [`ComponentSpec`](propgen_spec::ComponentSpec)
//! into a component file that declares `propTypes` with the
//! [prop-types](https://www.npmjs.com/package/prop-types) package.
//!
//! # Usage
//!
//! ```ignore
//! use propgen_codegen_js::{Generator, LanguageCodegen};
//! use propgen_spec::ComponentSpec;
//! use std::path::Path;
//!
//! let spec = ComponentSpec::parse("Button", ["label:string:true"], ["label:Click"])?;
//! let generator = Generator::new(&spec);
//!
//! // Preview without writing
//! let files = generator.preview();
//!
//! // Write Button.jsx
//! let result = generator.generate(Path::new("."))?;
//! ```

mod code_file;
mod facility;
mod generator;
mod literal;

pub mod ast;
pub mod files;
pub mod prop_types;

pub use code_file::CodeFile;
pub use facility::SchemaFacility;
pub use generator::Generator;
pub use literal::format_default_value;
pub use prop_types::format_prop_definition;
pub use propgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
