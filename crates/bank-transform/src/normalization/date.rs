//! Synthesis of `last_contact_date` from the source `month` and `day`.
//!
//! The source only records a month abbreviation and a day of month. The date
//! is built as the string `2022-<Mon>-<day>` and parsed with the
//! `%Y-%b-%d` pattern, so any month/day pair that does not name a real day
//! in 2022 is rejected rather than rolled over.

use chrono::NaiveDate;
use polars::prelude::*;

use bank_model::{CONTACT_DATE_FORMAT, CONTACT_YEAR, month_number};

use crate::error::{Result, TransformError, ValueError};

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_month(month: &str) -> String {
    let mut chars = month.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The intermediate `year-Mon-day` string, e.g. `2022-May-13`.
pub fn contact_date_string(month: &str, day: i64) -> String {
    format!("{CONTACT_YEAR}-{}-{day}", capitalize_month(month))
}

/// Builds the contact date for a month abbreviation and day of month.
///
/// Month matching is exact: surrounding whitespace or a full month name is
/// an unknown month.
pub fn synthesize_contact_date(
    month: &str,
    day: i64,
) -> std::result::Result<NaiveDate, ValueError> {
    if month_number(month).is_none() {
        return Err(ValueError::UnknownMonth {
            value: month.to_string(),
        });
    }
    let value = contact_date_string(month, day);
    NaiveDate::parse_from_str(&value, CONTACT_DATE_FORMAT).map_err(|e| ValueError::InvalidDate {
        reason: e.to_string(),
        value,
    })
}

/// Builds the `Date` column named `name` from the month and day columns.
///
/// Both inputs are required on every row.
pub fn contact_date_column(name: &str, month: &Column, day: &Column) -> Result<Series> {
    let months = month.str()?;
    let days = day.i64()?;
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(months.len());
    for (idx, (month_value, day_value)) in months.into_iter().zip(days).enumerate() {
        let row = idx + 1;
        let month_value =
            month_value.ok_or_else(|| TransformError::missing_value(month.name(), row))?;
        let day_value = day_value.ok_or_else(|| TransformError::missing_value(day.name(), row))?;
        let date = synthesize_contact_date(month_value, day_value)
            .map_err(|e| TransformError::value(name, row, e))?;
        dates.push(date);
    }
    Ok(DateChunked::from_naive_date(name.into(), dates).into_series())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_first_letter() {
        assert_eq!(capitalize_month("may"), "May");
        assert_eq!(capitalize_month("mAY"), "MAY");
        assert_eq!(capitalize_month(""), "");
    }

    #[test]
    fn date_string_format() {
        assert_eq!(contact_date_string("may", 13), "2022-May-13");
        assert_eq!(contact_date_string("aug", 5), "2022-Aug-5");
    }

    #[test]
    fn synthesize_valid_dates() {
        assert_eq!(
            synthesize_contact_date("may", 13),
            Ok(NaiveDate::from_ymd_opt(2022, 5, 13).unwrap())
        );
        assert_eq!(
            synthesize_contact_date("dec", 31),
            Ok(NaiveDate::from_ymd_opt(2022, 12, 31).unwrap())
        );
        assert_eq!(
            synthesize_contact_date("feb", 1),
            Ok(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap())
        );
    }

    #[test]
    fn day_out_of_range_for_month() {
        assert!(matches!(
            synthesize_contact_date("apr", 31),
            Err(ValueError::InvalidDate { .. })
        ));
        // 2022 is not a leap year
        assert!(matches!(
            synthesize_contact_date("feb", 29),
            Err(ValueError::InvalidDate { .. })
        ));
        assert!(synthesize_contact_date("jan", 0).is_err());
        assert!(synthesize_contact_date("jan", 32).is_err());
        assert!(synthesize_contact_date("jan", -1).is_err());
    }

    #[test]
    fn unknown_month() {
        assert_eq!(
            synthesize_contact_date("june", 1),
            Err(ValueError::UnknownMonth {
                value: "june".to_string()
            })
        );
        assert!(synthesize_contact_date("", 1).is_err());
    }

    #[test]
    fn month_whitespace_is_not_trimmed() {
        assert_eq!(
            synthesize_contact_date(" may", 13),
            Err(ValueError::UnknownMonth {
                value: " may".to_string()
            })
        );
        assert!(matches!(
            synthesize_contact_date("may ", 13),
            Err(ValueError::UnknownMonth { .. })
        ));
    }

    #[test]
    fn column_builds_dates() {
        let month = Series::new("month".into(), vec!["may", "nov"]).into_column();
        let day = Series::new("day".into(), vec![13i64, 2]).into_column();
        let dates = contact_date_column("last_contact_date", &month, &day).unwrap();
        assert_eq!(dates.dtype(), &DataType::Date);
        let rendered = dates.cast(&DataType::String).unwrap();
        let rendered = rendered.str().unwrap();
        assert_eq!(rendered.get(0), Some("2022-05-13"));
        assert_eq!(rendered.get(1), Some("2022-11-02"));
    }

    #[test]
    fn column_reports_failing_row() {
        let month = Series::new("month".into(), vec!["may", "apr"]).into_column();
        let day = Series::new("day".into(), vec![13i64, 31]).into_column();
        let err = contact_date_column("last_contact_date", &month, &day).unwrap_err();
        assert!(matches!(err, TransformError::Value { row: 2, .. }));
    }
}
