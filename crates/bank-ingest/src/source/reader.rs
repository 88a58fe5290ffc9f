//! Loading `bank_marketing.csv` into a typed DataFrame.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::parse::parse_source_columns;

use super::header::{SourceHeaders, normalize_header, read_source_schema, validate_source_headers};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options controlling how the source file is loaded.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Refuse files larger than this many bytes.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// The loaded source table.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// File the table was read from.
    pub path: PathBuf,
    /// Header as found in the file (may include ignored columns).
    pub headers: SourceHeaders,
    /// Source columns in schema order, typed per the source schema.
    pub data: DataFrame,
}

impl SourceTable {
    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads every column as text so that typing is decided by the source schema.
fn read_text_frame(path: &Path) -> Result<DataFrame> {
    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name.as_str()))
        .collect();
    df.set_column_names(names)?;
    Ok(df)
}

/// Loads and validates the source table.
///
/// Fails before any row is parsed when the file is missing, too large, not
/// UTF-8, or lacks a required column. Cell-level failures name the column,
/// the 1-based data row, and the raw value.
pub fn read_source_table(path: &Path, options: &IngestOptions) -> Result<SourceTable> {
    let start = Instant::now();
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let headers = read_source_schema(path)?;
    validate_source_headers(&headers, path)?;

    let text = read_text_frame(path)?;
    debug!(
        path = %path.display(),
        columns = text.width(),
        rows = text.height(),
        "read source text frame"
    );
    let data = parse_source_columns(&text)?;

    info!(
        path = %path.display(),
        rows = data.height(),
        duration_ms = start.elapsed().as_millis(),
        "source table loaded"
    );

    Ok(SourceTable {
        path: path.to_path_buf(),
        headers,
        data,
    })
}
