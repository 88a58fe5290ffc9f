//! Projection and layout helpers shared by the table builders.

use polars::prelude::{Column, DataFrame};

use bank_model::TableKind;

use crate::error::{Result, TransformError};

/// Get a column or report it as a missing source column.
pub(crate) fn required_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column> {
    frame
        .column(name)
        .map_err(|_| TransformError::MissingColumn {
            column: name.to_string(),
        })
}

/// Selects the source columns of `kind` and applies its rename table.
///
/// Input column order does not matter; the result follows the projection
/// order declared for the table.
pub fn project_and_rename(source: &DataFrame, kind: TableKind) -> Result<DataFrame> {
    for name in kind.source_columns() {
        required_column(source, name)?;
    }
    let mut frame = source.select(kind.source_columns().iter().copied())?;
    for entry in kind.renames() {
        frame.rename(entry.source, entry.target.into())?;
    }
    Ok(frame)
}

/// Restricts `frame` to the final layout of `kind`, in header order.
pub fn select_output_columns(frame: &DataFrame, kind: TableKind) -> Result<DataFrame> {
    for name in kind.columns() {
        required_column(frame, name)?;
    }
    Ok(frame.select(kind.columns().iter().copied())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn economics_source() -> DataFrame {
        DataFrame::new(vec![
            Series::new("nr_employed".into(), vec![5191.5f64]).into_column(),
            Series::new("euribor3m".into(), vec![4.857f64]).into_column(),
            Series::new("client_id".into(), vec![0i64]).into_column(),
            Series::new("cons_price_idx".into(), vec![93.994f64]).into_column(),
            Series::new("emp_var_rate".into(), vec![1.1f64]).into_column(),
            Series::new("age".into(), vec![56i64]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn projects_and_renames_in_declared_order() {
        let frame = project_and_rename(&economics_source(), TableKind::Economics).unwrap();
        let names: Vec<&str> = frame
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "client_id",
                "emp_var_rate",
                "cons_price_idx",
                "euribor_three_months",
                "number_employed"
            ]
        );
    }

    #[test]
    fn missing_source_column() {
        let mut source = economics_source();
        source.drop_in_place("euribor3m").unwrap();
        let err = project_and_rename(&source, TableKind::Economics).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingColumn { ref column } if column == "euribor3m"
        ));
    }
}
