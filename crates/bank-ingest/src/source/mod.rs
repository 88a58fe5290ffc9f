//! Source CSV reading utilities.

mod header;
mod reader;

pub use header::{SourceHeaders, read_source_schema, validate_source_headers};
pub use reader::{
    IngestOptions, MAX_CSV_FILE_SIZE, SourceTable, check_file_size_with_limit, read_source_table,
    validate_encoding,
};
