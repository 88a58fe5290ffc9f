//! Output table layouts and the fixed source-to-target rename tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::columns::{
    AGE, CAMPAIGN, CLIENT_ID, CONS_PRICE_IDX, CREDIT_DEFAULT, DAY, DURATION, EDUCATION,
    EMP_VAR_RATE, EURIBOR3M, HOUSING, JOB, LOAN, MARITAL, MONTH, NR_EMPLOYED, PDAYS, POUTCOME,
    PREVIOUS, Y,
};
use crate::error::ModelError;

pub const ID: &str = "id";
pub const NUMBER_CONTACTS: &str = "number_contacts";
pub const CONTACT_DURATION: &str = "contact_duration";
pub const PREVIOUS_CAMPAIGN_CONTACTS: &str = "previous_campaign_contacts";
pub const PREVIOUS_OUTCOME: &str = "previous_outcome";
pub const CAMPAIGN_OUTCOME: &str = "campaign_outcome";
pub const CAMPAIGN_ID: &str = "campaign_id";
pub const LAST_CONTACT_DATE: &str = "last_contact_date";
pub const EURIBOR_THREE_MONTHS: &str = "euribor_three_months";
pub const NUMBER_EMPLOYED: &str = "number_employed";

/// One entry of a rename table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRename {
    pub source: &'static str,
    pub target: &'static str,
}

const fn rename(source: &'static str, target: &'static str) -> ColumnRename {
    ColumnRename { source, target }
}

pub const CLIENT_SOURCE_COLUMNS: &[&str] = &[
    CLIENT_ID,
    AGE,
    JOB,
    MARITAL,
    EDUCATION,
    CREDIT_DEFAULT,
    HOUSING,
    LOAN,
];

pub const CLIENT_RENAMES: &[ColumnRename] = &[rename(CLIENT_ID, ID)];

pub const CLIENT_COLUMNS: &[&str] = &[
    ID,
    AGE,
    JOB,
    MARITAL,
    EDUCATION,
    CREDIT_DEFAULT,
    HOUSING,
    LOAN,
];

/// `month` and `day` are projected only to build `last_contact_date`.
pub const CAMPAIGN_SOURCE_COLUMNS: &[&str] = &[
    CLIENT_ID, CAMPAIGN, MONTH, DAY, DURATION, PDAYS, PREVIOUS, POUTCOME, Y,
];

pub const CAMPAIGN_RENAMES: &[ColumnRename] = &[
    rename(DURATION, CONTACT_DURATION),
    rename(Y, CAMPAIGN_OUTCOME),
    rename(CAMPAIGN, NUMBER_CONTACTS),
    rename(PREVIOUS, PREVIOUS_CAMPAIGN_CONTACTS),
    rename(POUTCOME, PREVIOUS_OUTCOME),
];

pub const CAMPAIGN_COLUMNS: &[&str] = &[
    CLIENT_ID,
    NUMBER_CONTACTS,
    CONTACT_DURATION,
    PDAYS,
    PREVIOUS_CAMPAIGN_CONTACTS,
    PREVIOUS_OUTCOME,
    CAMPAIGN_OUTCOME,
    CAMPAIGN_ID,
    LAST_CONTACT_DATE,
];

pub const ECONOMICS_SOURCE_COLUMNS: &[&str] = &[
    CLIENT_ID,
    EMP_VAR_RATE,
    CONS_PRICE_IDX,
    EURIBOR3M,
    NR_EMPLOYED,
];

pub const ECONOMICS_RENAMES: &[ColumnRename] = &[
    rename(EURIBOR3M, EURIBOR_THREE_MONTHS),
    rename(NR_EMPLOYED, NUMBER_EMPLOYED),
];

pub const ECONOMICS_COLUMNS: &[&str] = &[
    CLIENT_ID,
    EMP_VAR_RATE,
    CONS_PRICE_IDX,
    EURIBOR_THREE_MONTHS,
    NUMBER_EMPLOYED,
];

/// The three tables derived from the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Client,
    Campaign,
    Economics,
}

impl TableKind {
    /// All tables in output order.
    pub const ALL: [TableKind; 3] = [TableKind::Client, TableKind::Campaign, TableKind::Economics];

    /// Table name as used in the database schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Client => "client",
            TableKind::Campaign => "campaign",
            TableKind::Economics => "economics",
        }
    }

    /// File name the table is written to.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Client => "client.csv",
            TableKind::Campaign => "campaign.csv",
            TableKind::Economics => "economics.csv",
        }
    }

    /// Source columns projected into this table.
    pub fn source_columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Client => CLIENT_SOURCE_COLUMNS,
            TableKind::Campaign => CAMPAIGN_SOURCE_COLUMNS,
            TableKind::Economics => ECONOMICS_SOURCE_COLUMNS,
        }
    }

    /// Renames applied after projection.
    pub fn renames(&self) -> &'static [ColumnRename] {
        match self {
            TableKind::Client => CLIENT_RENAMES,
            TableKind::Campaign => CAMPAIGN_RENAMES,
            TableKind::Economics => ECONOMICS_RENAMES,
        }
    }

    /// Final column layout, which is also the CSV header.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Client => CLIENT_COLUMNS,
            TableKind::Campaign => CAMPAIGN_COLUMNS,
            TableKind::Economics => ECONOMICS_COLUMNS,
        }
    }

    /// Source column an output column was renamed from, if any.
    pub fn renamed_from(&self, target: &str) -> Option<&'static str> {
        self.renames()
            .iter()
            .find(|entry| entry.target == target)
            .map(|entry| entry.source)
    }

    /// The CSV header line (without trailing newline).
    pub fn header(&self) -> String {
        self.columns().join(",")
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(TableKind::Client),
            "campaign" => Ok(TableKind::Campaign),
            "economics" => Ok(TableKind::Economics),
            _ => Err(ModelError::UnknownTable(s.to_string())),
        }
    }
}
