//! Text cleanup for client categorical columns.

use polars::prelude::*;

use bank_model::{EDUCATION_ABSENT, EDUCATION_SEPARATOR};

use crate::error::Result;

/// Normalizes an education level.
///
/// Dots become underscores first ("basic.4y" -> "basic_4y"), then the
/// literal "unknown" becomes absent.
pub fn normalize_education(value: &str) -> Option<String> {
    let replaced = value.replace('.', EDUCATION_SEPARATOR);
    if replaced == EDUCATION_ABSENT {
        None
    } else {
        Some(replaced)
    }
}

/// Removes every period from a job title ("admin." -> "admin").
pub fn clean_job(value: &str) -> String {
    if value.contains('.') {
        value.chars().filter(|ch| *ch != '.').collect()
    } else {
        value.to_string()
    }
}

/// Applies [`normalize_education`] to every cell; nulls stay null.
pub fn normalize_education_column(column: &Column) -> Result<Series> {
    let values = column.str()?;
    let normalized: Vec<Option<String>> = values
        .into_iter()
        .map(|value| value.and_then(normalize_education))
        .collect();
    Ok(Series::new(column.name().clone(), normalized))
}

/// Applies [`clean_job`] to every cell; nulls stay null.
pub fn clean_job_column(column: &Column) -> Result<Series> {
    let values = column.str()?;
    let cleaned: Vec<Option<String>> = values
        .into_iter()
        .map(|value| value.map(clean_job))
        .collect();
    Ok(Series::new(column.name().clone(), cleaned))
}
