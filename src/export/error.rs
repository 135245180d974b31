//! Error types for mesh export.

use crate::host::HostError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal export failures. Precondition problems are reported as
/// diagnostics instead and never show up here.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A host operator failed while preparing the mesh.
    #[error("Host operation failed: {0}")]
    Host(#[from] HostError),

    /// Reading or writing the output file failed.
    #[error("Failed to access {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::Host(HostError::NoMeshData("Cube".to_string()));
        assert_eq!(
            err.to_string(),
            "Host operation failed: Object 'Cube' has no mesh data"
        );

        let err = ExportError::Io {
            path: PathBuf::from("/nope/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/out.json"));
    }
}
