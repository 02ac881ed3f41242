//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to support emitting components in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "javascript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "jsx")
    fn file_extension(&self) -> &str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, in write order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
