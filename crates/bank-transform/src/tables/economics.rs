//! Economic indicators table.

use polars::prelude::DataFrame;
use tracing::debug;

use bank_model::TableKind;

use crate::error::Result;
use crate::frame::{project_and_rename, select_output_columns};

/// Builds the economics table. Values are copied unchanged; only
/// `euribor3m` and `nr_employed` are renamed.
pub fn build_economics_table(source: &DataFrame) -> Result<DataFrame> {
    let frame = project_and_rename(source, TableKind::Economics)?;
    let frame = select_output_columns(&frame, TableKind::Economics)?;
    debug!(
        table = %TableKind::Economics,
        rows = frame.height(),
        "built table"
    );
    Ok(frame)
}
