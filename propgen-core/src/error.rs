use std::path::PathBuf;

use thiserror::Error;

/// Failure to write a generated file to disk.
#[derive(Debug, Error)]
#[error("Could not write to file '{}': {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
