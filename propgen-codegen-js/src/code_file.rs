//! CodeFile abstraction for structured JavaScript file generation.
//!
//! Provides a high-level API for generating JavaScript files with
//! organized imports, body content, and exports sections.

use propgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a JavaScript file.
///
/// Organizes code into three sections: imports, body, and exports.
/// Sections and body elements are separated by one blank line.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("PropTypes", "prop-types"))
///     .add(Const::object("propTypes", prop_types))
///     .export(Export::new("Button"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    ///
    /// A slice of nodes counts as one element, so its nodes are not
    /// separated by blank lines.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::javascript();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }
}
