//! Source column definitions for `bank_marketing.csv`.
//!
//! The source file has one fixed schema. Each column is declared once with
//! its expected value kind and whether a row may leave it empty.

use std::fmt;

pub const CLIENT_ID: &str = "client_id";
pub const AGE: &str = "age";
pub const JOB: &str = "job";
pub const MARITAL: &str = "marital";
pub const EDUCATION: &str = "education";
pub const CREDIT_DEFAULT: &str = "credit_default";
pub const HOUSING: &str = "housing";
pub const LOAN: &str = "loan";
pub const CAMPAIGN: &str = "campaign";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";
pub const DURATION: &str = "duration";
pub const PDAYS: &str = "pdays";
pub const PREVIOUS: &str = "previous";
pub const POUTCOME: &str = "poutcome";
pub const Y: &str = "y";
pub const EMP_VAR_RATE: &str = "emp_var_rate";
pub const CONS_PRICE_IDX: &str = "cons_price_idx";
pub const EURIBOR3M: &str = "euribor3m";
pub const NR_EMPLOYED: &str = "nr_employed";

/// Value kind of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Whole number, loaded as `Int64`.
    Integer,
    /// Floating point, loaded as `Float64`.
    Float,
    /// Free or categorical text, loaded as `String`.
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column of the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Rows must carry a value for this column.
    pub required: bool,
}

impl SourceColumn {
    const fn new(name: &'static str, kind: ColumnKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
        }
    }
}

/// Every column `bank_marketing.csv` must provide, in file order.
pub const SOURCE_COLUMNS: &[SourceColumn] = &[
    SourceColumn::new(CLIENT_ID, ColumnKind::Integer, true),
    SourceColumn::new(AGE, ColumnKind::Integer, false),
    SourceColumn::new(JOB, ColumnKind::Text, false),
    SourceColumn::new(MARITAL, ColumnKind::Text, false),
    SourceColumn::new(EDUCATION, ColumnKind::Text, false),
    SourceColumn::new(CREDIT_DEFAULT, ColumnKind::Text, false),
    SourceColumn::new(HOUSING, ColumnKind::Text, false),
    SourceColumn::new(LOAN, ColumnKind::Text, false),
    SourceColumn::new(CAMPAIGN, ColumnKind::Integer, false),
    SourceColumn::new(MONTH, ColumnKind::Text, true),
    SourceColumn::new(DAY, ColumnKind::Integer, true),
    SourceColumn::new(DURATION, ColumnKind::Integer, false),
    SourceColumn::new(PDAYS, ColumnKind::Integer, false),
    SourceColumn::new(PREVIOUS, ColumnKind::Integer, false),
    SourceColumn::new(POUTCOME, ColumnKind::Text, false),
    SourceColumn::new(Y, ColumnKind::Text, true),
    SourceColumn::new(EMP_VAR_RATE, ColumnKind::Float, false),
    SourceColumn::new(CONS_PRICE_IDX, ColumnKind::Float, false),
    SourceColumn::new(EURIBOR3M, ColumnKind::Float, false),
    SourceColumn::new(NR_EMPLOYED, ColumnKind::Float, false),
];
