//! Data model for the bank marketing splitter.
//!
//! Everything the pipeline treats as fixed lives here as static data: the
//! source column set, the three output table layouts, the column rename
//! tables, and the categorical mapping tables. Keeping them in one place makes
//! each rule independently testable.

pub mod columns;
pub mod error;
pub mod mapping;
pub mod processing;
pub mod table;

pub use columns::{ColumnKind, SOURCE_COLUMNS, SourceColumn};
pub use error::{ModelError, Result};
pub use mapping::{
    CAMPAIGN_ID_PLACEHOLDER, CAMPAIGN_OUTCOME_CODES, CONTACT_DATE_FORMAT, CONTACT_YEAR,
    EDUCATION_ABSENT, EDUCATION_SEPARATOR, MONTH_ABBREVIATIONS, PREVIOUS_OUTCOME_ABSENT,
    PREVIOUS_OUTCOME_CODES, lookup_code, month_number,
};
pub use processing::{RunReport, TableOutput};
pub use table::{ColumnRename, TableKind};
