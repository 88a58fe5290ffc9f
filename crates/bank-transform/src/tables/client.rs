//! Client demographics table.

use polars::prelude::DataFrame;
use tracing::debug;

use bank_model::TableKind;
use bank_model::columns::{EDUCATION, JOB};

use crate::error::Result;
use crate::frame::{project_and_rename, required_column, select_output_columns};
use crate::normalization::{clean_job_column, normalize_education_column};

/// Builds the client table: `client_id` becomes `id`, `job` loses its
/// periods, and `education` is normalized with "unknown" as absent.
pub fn build_client_table(source: &DataFrame) -> Result<DataFrame> {
    let mut frame = project_and_rename(source, TableKind::Client)?;

    let education = normalize_education_column(required_column(&frame, EDUCATION)?)?;
    let job = clean_job_column(required_column(&frame, JOB)?)?;
    frame.with_column(education)?;
    frame.with_column(job)?;

    let frame = select_output_columns(&frame, TableKind::Client)?;
    debug!(
        table = %TableKind::Client,
        rows = frame.height(),
        absent_education = frame.column(EDUCATION)?.null_count(),
        "built table"
    );
    Ok(frame)
}
