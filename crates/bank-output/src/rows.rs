//! Text rendering of individual table rows, for previews and trace logs.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a cell to display text; nulls render empty.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => {
            let s = other.to_string();
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Row `idx` of `frame` as `name=value` pairs, or `None` past the end.
pub fn format_row(frame: &DataFrame, idx: usize) -> Option<String> {
    if idx >= frame.height() {
        return None;
    }
    let fields: Vec<String> = frame
        .get_columns()
        .iter()
        .map(|column| {
            let value = column
                .get(idx)
                .map(any_to_string)
                .unwrap_or_default();
            format!("{}={value}", column.name())
        })
        .collect();
    Some(fields.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, IntoColumn, NamedFrom, Series};

    #[test]
    fn renders_cells() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int32(1)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(4.857)), "4.857");
        assert_eq!(any_to_string(AnyValue::String("admin")), "admin");
    }

    #[test]
    fn formats_rows_with_dates() {
        let dates = Series::new("last_contact_date".into(), vec![19_125i32])
            .cast(&DataType::Date)
            .unwrap();
        let frame = DataFrame::new(vec![
            Series::new("client_id".into(), vec![7i64]).into_column(),
            Series::new("previous_outcome".into(), vec![None::<i32>]).into_column(),
            dates.into_column(),
        ])
        .unwrap();
        assert_eq!(
            format_row(&frame, 0).as_deref(),
            Some("client_id=7 previous_outcome= last_contact_date=2022-05-13")
        );
        assert_eq!(format_row(&frame, 1), None);
    }
}
