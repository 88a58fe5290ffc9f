//! Error types for the transform pipeline.

use thiserror::Error;

/// A single cell value outside its accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Categorical value missing from its mapping table.
    #[error("unrecognized value '{value}' (expected one of: {expected})")]
    Unrecognized { value: String, expected: String },

    /// Month is not a three-letter abbreviation.
    #[error("unrecognized month abbreviation '{value}'")]
    UnknownMonth { value: String },

    /// The synthesized date string does not name a calendar date.
    #[error("'{value}' is not a valid calendar date: {reason}")]
    InvalidDate { value: String, reason: String },
}

/// Errors raised while building the output tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the pipeline projects is absent from the source frame.
    #[error("source column '{column}' not found")]
    MissingColumn { column: String },

    /// A cell holds a value outside its domain.
    #[error("invalid value in column '{column}' at row {row}")]
    Value {
        column: String,
        row: usize,
        #[source]
        source: ValueError,
    },

    /// A cell the transform needs is empty.
    #[error("missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    pub(crate) fn value(column: &str, row: usize, source: ValueError) -> Self {
        Self::Value {
            column: column.to_string(),
            row,
            source,
        }
    }

    pub(crate) fn missing_value(column: &str, row: usize) -> Self {
        Self::MissingValue {
            column: column.to_string(),
            row,
        }
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
