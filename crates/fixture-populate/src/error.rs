//! Error types for fixture population.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing fixture files.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Creating or writing a fixture file failed.
    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PopulateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PopulateError::Io {
            path: path.into(),
            source,
        }
    }
}
