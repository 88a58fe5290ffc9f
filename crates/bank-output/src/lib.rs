//! Output generation for the bank marketing split.
//!
//! - **CSV**: `client.csv`, `campaign.csv` and `economics.csv`, with the
//!   SHA-256 of every written file
//! - **Schema**: the static PostgreSQL DDL with its `\copy` load directives
//! - **Report**: a JSON summary of one run

mod error;
mod report;
mod rows;
mod schema;
mod writer;

pub use error::{OutputError, Result};
pub use report::{OutputOptions, write_run_report};
pub use rows::{any_to_string, format_row};
pub use schema::{CAMPAIGN_DDL, CLIENT_DDL, ECONOMICS_DDL, schema_ddl, table_ddl, write_schema_file};
pub use writer::{
    dry_run_outputs, render_table_csv, sha256_hex, table_path, write_split_outputs,
    write_table_csv,
};
