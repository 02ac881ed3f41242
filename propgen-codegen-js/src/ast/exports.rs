//! JavaScript export builder.

use propgen_codegen::{CodeFragment, Renderable};

/// A default export, `export default <name>;`.
#[derive(Debug, Clone)]
pub struct Export {
    name: String,
}

impl Export {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("export default {};", self.name))]
    }
}
