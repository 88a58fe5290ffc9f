//! Campaign interactions table.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use bank_model::columns::{DAY, MONTH};
use bank_model::table::{CAMPAIGN_ID, CAMPAIGN_OUTCOME, LAST_CONTACT_DATE, PREVIOUS_OUTCOME};
use bank_model::{CAMPAIGN_ID_PLACEHOLDER, TableKind};

use crate::error::Result;
use crate::frame::{project_and_rename, required_column, select_output_columns};
use crate::normalization::{
    contact_date_column, encode_campaign_outcome_column, encode_previous_outcome_column,
};

/// `campaign_id` column: the placeholder value on every row.
fn campaign_id_column(height: usize) -> Series {
    Series::new(CAMPAIGN_ID.into(), vec![CAMPAIGN_ID_PLACEHOLDER; height])
}

/// Builds the campaign table.
///
/// Outcomes are binarized, `campaign_id` is stamped with the placeholder,
/// and `last_contact_date` is synthesized from `month` and `day`, which are
/// then dropped.
pub fn build_campaign_table(source: &DataFrame) -> Result<DataFrame> {
    let mut frame = project_and_rename(source, TableKind::Campaign)?;

    let campaign_outcome =
        encode_campaign_outcome_column(required_column(&frame, CAMPAIGN_OUTCOME)?)?;
    let previous_outcome =
        encode_previous_outcome_column(required_column(&frame, PREVIOUS_OUTCOME)?)?;
    let last_contact = contact_date_column(
        LAST_CONTACT_DATE,
        required_column(&frame, MONTH)?,
        required_column(&frame, DAY)?,
    )?;
    let campaign_id = campaign_id_column(frame.height());

    frame.with_column(previous_outcome)?;
    frame.with_column(campaign_outcome)?;
    frame.with_column(campaign_id)?;
    frame.with_column(last_contact)?;
    frame.drop_in_place(MONTH)?;
    frame.drop_in_place(DAY)?;

    let frame = select_output_columns(&frame, TableKind::Campaign)?;
    debug!(
        table = %TableKind::Campaign,
        rows = frame.height(),
        absent_previous_outcome = frame.column(PREVIOUS_OUTCOME)?.null_count(),
        "built table"
    );
    Ok(frame)
}
