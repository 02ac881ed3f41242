//! JavaScript import builder.

use propgen_codegen::{CodeFragment, Renderable};

/// A default import, `import <binding> from '<module>';`.
#[derive(Debug, Clone)]
pub struct Import {
    binding: String,
    from: String,
}

impl Import {
    pub fn new(binding: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            from: from.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {} from '{}';",
            self.binding, self.from
        ))]
    }
}
