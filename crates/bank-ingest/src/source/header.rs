//! Source header inspection and validation.

use std::collections::BTreeSet;
use std::path::Path;

use bank_model::SOURCE_COLUMNS;

use crate::error::{IngestError, Result};

/// Column names found in the source header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHeaders {
    /// Normalized column names in file order.
    pub columns: Vec<String>,
}

impl SourceHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Required source columns absent from this header, in schema order.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        SOURCE_COLUMNS
            .iter()
            .map(|column| column.name)
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Header columns the pipeline does not use.
    pub fn extra_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| SOURCE_COLUMNS.iter().all(|column| column.name != *name))
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads only the header row of a CSV file.
pub fn read_source_schema(path: &Path) -> Result<SourceHeaders> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;
    let record = reader.headers().map_err(|e| csv_error(path, &e))?;
    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(SourceHeaders::new(columns))
}

/// Checks that every source column is present exactly once.
///
/// All missing columns are reported together. Columns outside the source
/// schema are tolerated and only logged.
pub fn validate_source_headers(headers: &SourceHeaders, path: &Path) -> Result<()> {
    let missing = headers.missing_columns();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing.into_iter().map(str::to_string).collect(),
        });
    }

    let mut seen = BTreeSet::new();
    for column in &headers.columns {
        if !seen.insert(column.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: column.clone(),
                path: path.to_path_buf(),
            });
        }
    }

    let extra = headers.extra_columns();
    if !extra.is_empty() {
        tracing::debug!(
            path = %path.display(),
            ignored = ?extra,
            "ignoring columns outside the source schema"
        );
    }
    Ok(())
}

fn csv_error(path: &Path, err: &::csv::Error) -> IngestError {
    if let ::csv::ErrorKind::Io(io) = err.kind() {
        if io.kind() == std::io::ErrorKind::NotFound {
            return IngestError::FileNotFound {
                path: path.to_path_buf(),
            };
        }
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
