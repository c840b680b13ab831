//! Error types for the host
//!
//! Every fallible host operation returns [`Result`]. I/O failures carry the
//! path they happened at.

use std::path::PathBuf;
use thiserror::Error;

/// Host-level error types
///
/// Covers filesystem access, settings and manifest serialization, and
/// settings validation.
#[derive(Error, Debug)]
pub enum HostError {
    /// Reading or writing a file under `path` failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings or manifest could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base path does not start with `/`
    #[error("Invalid base path: {0:?} (must start with '/')")]
    InvalidBasePath(String),
}

pub type Result<T> = std::result::Result<T, HostError>;

pub(crate) trait IoContext<T> {
    fn at(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| HostError::Io { path: path.into(), source })
    }
}
