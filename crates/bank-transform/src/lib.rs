//! Bank marketing transform pipeline.
//!
//! Splits the flat source table into three normalized tables. Each output
//! table is built by a pure function over the shared source frame:
//!
//! - [`build_client_table`]: demographics, with cleaned `job` and `education`
//! - [`build_campaign_table`]: contact history, binary outcomes, synthesized
//!   `last_contact_date`, and the constant `campaign_id`
//! - [`build_economics_table`]: economic indicators
//!
//! [`split_source_table`] runs all three and fails the whole run on the first
//! invalid value. Row count and row order always follow the source.
//!
//! # Example
//!
//! ```ignore
//! use bank_transform::split_source_table;
//!
//! let tables = split_source_table(&source.data)?;
//! assert_eq!(tables.client.height(), source.data.height());
//! ```

mod error;
mod frame;
mod pipeline;
mod tables;

pub mod normalization;

// Error type
pub use error::{Result, TransformError, ValueError};

// Frame helpers
pub use frame::{project_and_rename, select_output_columns};

// Table builders
pub use tables::{build_campaign_table, build_client_table, build_economics_table};

// Pipeline
pub use pipeline::{SplitTables, split_source_table};
