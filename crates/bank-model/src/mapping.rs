//! Categorical mapping tables and value conventions.
//!
//! Each mapping is total over its documented domain; a value outside it is a
//! data error, never a silent null.

/// Replacement for "." in education levels ("basic.4y" becomes "basic_4y").
pub const EDUCATION_SEPARATOR: &str = "_";

/// Education level that is loaded as absent.
pub const EDUCATION_ABSENT: &str = "unknown";

/// Outcome of the current campaign (`y`).
pub const CAMPAIGN_OUTCOME_CODES: &[(&str, i32)] = &[("yes", 1), ("no", 0)];

/// Outcome of the previous campaign (`poutcome`) after the absent marker is removed.
pub const PREVIOUS_OUTCOME_CODES: &[(&str, i32)] = &[("success", 1), ("failure", 0)];

/// Previous outcome meaning the client was never part of an earlier campaign.
pub const PREVIOUS_OUTCOME_ABSENT: &str = "nonexistent";

/// Value stamped into every `campaign_id`.
///
/// This is a placeholder surrogate: every row carries the same value even
/// though the schema declares the column as the campaign primary key.
pub const CAMPAIGN_ID_PLACEHOLDER: i32 = 1;

/// The source only records month and day; contacts are assumed to be in this year.
pub const CONTACT_YEAR: i32 = 2022;

/// Pattern used to parse the synthesized `year-Mon-day` string.
pub const CONTACT_DATE_FORMAT: &str = "%Y-%b-%d";

/// Recognized month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Look up the code for `value` in a mapping table (exact match).
pub fn lookup_code(codes: &[(&str, i32)], value: &str) -> Option<i32> {
    codes
        .iter()
        .find(|(label, _)| *label == value)
        .map(|(_, code)| *code)
}

/// Month number (1-12) for a three-letter abbreviation, ignoring ASCII case.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(abbreviation))
        .and_then(|idx| u32::try_from(idx + 1).ok())
}
