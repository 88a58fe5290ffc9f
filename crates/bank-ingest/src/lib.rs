//! Source ingestion for the bank marketing splitter.
//!
//! This crate loads `bank_marketing.csv` into a Polars DataFrame whose columns
//! follow the fixed source schema declared in `bank-model`.
//!
//! # Features
//!
//! - **Header validation**: every required column must be present; all missing
//!   names are reported at once, extra columns are ignored
//! - **Pre-flight checks**: file existence, size limit, UTF-16 detection
//! - **Typed columns**: integer and float columns are parsed with per-row error
//!   reporting instead of relying on schema inference
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bank_ingest::{IngestOptions, read_source_table};
//!
//! let source = read_source_table(Path::new("bank_marketing.csv"), &IngestOptions::default())?;
//! println!("{} rows", source.height());
//! ```

mod error;
mod parse;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use source::{
    IngestOptions, MAX_CSV_FILE_SIZE, SourceHeaders, SourceTable, check_file_size_with_limit,
    read_source_schema, read_source_table, validate_encoding, validate_source_headers,
};

// === Typed Parsing ===
pub use parse::{parse_float, parse_integer, parse_source_columns};
