//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

use bank_model::ColumnKind;

/// Errors that can occur while loading the source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Required columns are absent from the header.
    #[error("missing required column(s) in {path}: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// A column name appears more than once in the header.
    #[error("duplicate column '{column}' in {path}")]
    DuplicateColumn { column: String, path: PathBuf },

    // === Value Errors ===
    /// A cell could not be parsed as its declared kind.
    #[error("invalid {kind} value '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
        kind: ColumnKind,
    },

    /// A required cell is empty.
    #[error("missing value in required column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
