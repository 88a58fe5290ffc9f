//! Typed parsing of source columns.
//!
//! The source is read with every column as text; this module converts each
//! column to the kind declared in the source schema. Row numbers in errors are
//! 1-based data rows (the header row is not counted).

use polars::prelude::*;

use bank_model::{ColumnKind, SOURCE_COLUMNS, SourceColumn};

use crate::error::{IngestError, Result};

/// Parses an integer cell, tolerating surrounding whitespace.
pub fn parse_integer(column: &str, row: usize, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| invalid(column, row, raw, ColumnKind::Integer))
}

/// Parses a float cell, tolerating surrounding whitespace.
pub fn parse_float(column: &str, row: usize, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(column, row, raw, ColumnKind::Float))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(column, row, raw, ColumnKind::Float))
    }
}

fn invalid(column: &str, row: usize, raw: &str, kind: ColumnKind) -> IngestError {
    IngestError::InvalidNumber {
        column: column.to_string(),
        row,
        value: raw.to_string(),
        kind,
    }
}

fn missing(column: &str, row: usize) -> IngestError {
    IngestError::MissingValue {
        column: column.to_string(),
        row,
    }
}

/// Converts one text column to its declared kind.
fn parse_column(df: &DataFrame, column: &SourceColumn) -> Result<Column> {
    let values = df.column(column.name)?.str()?;
    let name = column.name;

    let series = match column.kind {
        ColumnKind::Integer => {
            let mut parsed: Vec<Option<i64>> = Vec::with_capacity(values.len());
            for (idx, raw) in values.into_iter().enumerate() {
                let row = idx + 1;
                parsed.push(match raw {
                    Some(raw) => Some(parse_integer(name, row, raw)?),
                    None if column.required => return Err(missing(name, row)),
                    None => None,
                });
            }
            Series::new(name.into(), parsed)
        }
        ColumnKind::Float => {
            let mut parsed: Vec<Option<f64>> = Vec::with_capacity(values.len());
            for (idx, raw) in values.into_iter().enumerate() {
                let row = idx + 1;
                parsed.push(match raw {
                    Some(raw) => Some(parse_float(name, row, raw)?),
                    None if column.required => return Err(missing(name, row)),
                    None => None,
                });
            }
            Series::new(name.into(), parsed)
        }
        ColumnKind::Text => {
            if column.required {
                if let Some(idx) = values.into_iter().position(|raw| raw.is_none()) {
                    return Err(missing(name, idx + 1));
                }
            }
            values.clone().into_series()
        }
    };
    Ok(series.into_column())
}

/// Projects the source schema out of a text-only frame and types each column.
///
/// Columns come back in schema order; columns outside the schema are dropped.
pub fn parse_source_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(SOURCE_COLUMNS.len());
    for column in SOURCE_COLUMNS {
        columns.push(parse_column(df, column)?);
    }
    Ok(DataFrame::new(columns)?)
}
