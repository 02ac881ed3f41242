//! JavaScript component generator.

use std::path::Path;

use eyre::Result;
use propgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use propgen_core::GeneratedFile;
use propgen_spec::ComponentSpec;

use crate::files::{ComponentFile, DEFAULT_EXTENSION};

/// Generator that produces one prop-types component file.
pub struct Generator<'a> {
    spec: &'a ComponentSpec,
    extension: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let file = self.component_file();
        vec![PreviewFile {
            path: file.file_name(),
            content: file.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let path = self.component_file().write(output_dir)?;
        log::debug!("wrote {}", path.display());

        Ok(GenerateResult {
            written: vec![path],
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a ComponentSpec) -> Self {
        Self {
            spec,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn component_file(&self) -> ComponentFile<'_> {
        ComponentFile::new(self.spec).with_extension(&self.extension)
    }
}
