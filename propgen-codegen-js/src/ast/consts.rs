//! JavaScript const declaration builder.

use propgen_codegen::{CodeFragment, Renderable};

use super::JsObject;

/// A `const <name> = { ... };` declaration bound to an object literal.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: JsObject,
}

impl Const {
    /// A const bound to an object literal, one member per line.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("const {} = {{", self.name),
            self.value.body_fragments(),
            Some("};".to_string()),
        )]
    }
}
