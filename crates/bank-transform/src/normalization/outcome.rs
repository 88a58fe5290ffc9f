//! Categorical-to-binary encoding of campaign outcomes.

use polars::prelude::*;

use bank_model::{
    CAMPAIGN_OUTCOME_CODES, PREVIOUS_OUTCOME_ABSENT, PREVIOUS_OUTCOME_CODES, lookup_code,
};

use crate::error::{Result, TransformError, ValueError};

fn expected_labels(codes: &[(&str, i32)]) -> String {
    codes
        .iter()
        .map(|(label, _)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn encode(codes: &[(&str, i32)], value: &str) -> std::result::Result<i32, ValueError> {
    lookup_code(codes, value).ok_or_else(|| ValueError::Unrecognized {
        value: value.to_string(),
        expected: expected_labels(codes),
    })
}

/// Encodes `y`: "yes" -> 1, "no" -> 0.
pub fn encode_campaign_outcome(value: &str) -> std::result::Result<i32, ValueError> {
    encode(CAMPAIGN_OUTCOME_CODES, value)
}

/// Maps the "nonexistent" marker to absent; other values pass through.
pub fn mark_previous_outcome_absent(value: &str) -> Option<&str> {
    if value == PREVIOUS_OUTCOME_ABSENT {
        None
    } else {
        Some(value)
    }
}

/// Encodes `poutcome` after absent marking: "success" -> 1, "failure" -> 0.
///
/// Absent input stays absent.
pub fn encode_previous_outcome(
    value: Option<&str>,
) -> std::result::Result<Option<i32>, ValueError> {
    value
        .map(|value| encode(PREVIOUS_OUTCOME_CODES, value))
        .transpose()
}

/// Encodes the campaign outcome column. Every row must hold "yes" or "no".
pub fn encode_campaign_outcome_column(column: &Column) -> Result<Series> {
    let name = column.name().clone();
    let values = column.str()?;
    let mut codes: Vec<i32> = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        let row = idx + 1;
        let value = value.ok_or_else(|| TransformError::missing_value(&name, row))?;
        let code =
            encode_campaign_outcome(value).map_err(|e| TransformError::value(&name, row, e))?;
        codes.push(code);
    }
    Ok(Series::new(name, codes))
}

/// Encodes the previous outcome column; "nonexistent" and empty cells become null.
pub fn encode_previous_outcome_column(column: &Column) -> Result<Series> {
    let name = column.name().clone();
    let values = column.str()?;
    let mut codes: Vec<Option<i32>> = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        let marked = value.and_then(mark_previous_outcome_absent);
        let code =
            encode_previous_outcome(marked).map_err(|e| TransformError::value(&name, idx + 1, e))?;
        codes.push(code);
    }
    Ok(Series::new(name, codes))
}
