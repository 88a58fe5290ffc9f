//! Error types for output generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing output artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be created or written.
    #[error("failed to write {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Polars failed to serialize a table.
    #[error("failed to serialize {path} as CSV: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// The run report could not be serialized.
    #[error("failed to serialize run report {path}")]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_keeps_io_source() {
        let err = OutputError::FileWrite {
            path: PathBuf::from("out/client.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/client.csv");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
