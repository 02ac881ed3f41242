use std::path::{Path, PathBuf};

use crate::WriteError;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any existing file
    fn write(&self, base: &Path) -> Result<PathBuf, WriteError> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path` in one call.
fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    log::debug!("writing {} bytes to {}", content.len(), path.display());
    std::fs::write(path, content).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}
