//! Error types for fixture verification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop verification of a fixture file before any item is checked.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Reading the fixture file failed.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not have the provider's document shape.
    #[error("{} does not match the expected document shape: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
