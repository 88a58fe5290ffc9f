//! Value normalization for the output tables.
//!
//! Each submodule pairs pure value-level functions with column-level wrappers
//! that apply them to a Polars column and attach the row number to failures:
//! - **text**: education and job cleanup
//! - **outcome**: yes/no and success/failure to 1/0
//! - **date**: `last_contact_date` synthesis

pub mod date;
pub mod outcome;
pub mod text;

// Re-export commonly used items
pub use date::{capitalize_month, contact_date_column, contact_date_string, synthesize_contact_date};
pub use outcome::{
    encode_campaign_outcome, encode_campaign_outcome_column, encode_previous_outcome,
    encode_previous_outcome_column, mark_previous_outcome_absent,
};
pub use text::{clean_job, clean_job_column, normalize_education, normalize_education_column};
