//! Property-based tests for the value normalizers.
//!
//! These tests verify invariants that must hold for all inputs.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use bank_transform::normalization::{
    clean_job, encode_campaign_outcome, encode_previous_outcome, mark_previous_outcome_absent,
    normalize_education, synthesize_contact_date,
};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Category-like text: lowercase words, digits, dots and dashes.
fn category_text() -> impl Strategy<Value = String> {
    "[a-z0-9.\\-]{0,24}"
}

fn days_in_2022(month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(2023, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(2022, month + 1, 1)
    };
    next.unwrap().pred_opt().unwrap().day()
}

proptest! {
    #[test]
    fn education_never_keeps_dots(value in category_text()) {
        if let Some(normalized) = normalize_education(&value) {
            prop_assert!(!normalized.contains('.'));
            prop_assert_eq!(normalized.len(), value.len());
        } else {
            prop_assert_eq!(value.as_str(), "unknown");
        }
    }

    #[test]
    fn job_never_keeps_dots(value in category_text()) {
        let cleaned = clean_job(&value);
        prop_assert!(!cleaned.contains('.'));
        prop_assert_eq!(cleaned.len(), value.len() - value.matches('.').count());
    }

    #[test]
    fn job_without_dots_is_unchanged(value in "[a-z\\-]{0,24}") {
        prop_assert_eq!(clean_job(&value), value);
    }

    #[test]
    fn campaign_outcome_only_accepts_yes_no(value in "[a-z]{0,8}") {
        match encode_campaign_outcome(&value) {
            Ok(code) => {
                prop_assert!(code == 0 || code == 1);
                prop_assert!(value == "yes" || value == "no");
            }
            Err(_) => prop_assert!(value != "yes" && value != "no"),
        }
    }

    #[test]
    fn previous_outcome_absent_only_for_marker(
        value in prop_oneof![
            Just("nonexistent".to_string()),
            Just("success".to_string()),
            Just("failure".to_string()),
        ]
    ) {
        let encoded = encode_previous_outcome(mark_previous_outcome_absent(&value)).unwrap();
        prop_assert_eq!(encoded.is_none(), value == "nonexistent");
    }

    #[test]
    fn contact_dates_match_calendar(month_idx in 0usize..12, day in -3i64..40) {
        let month = u32::try_from(month_idx + 1).unwrap();
        let result = synthesize_contact_date(MONTHS[month_idx], day);
        let valid = day >= 1 && day <= i64::from(days_in_2022(month));
        prop_assert_eq!(result.is_ok(), valid);
        if let Ok(date) = result {
            prop_assert_eq!(date.year(), 2022);
            prop_assert_eq!(date.month(), month);
            prop_assert_eq!(i64::from(date.day()), day);
        }
    }
}
