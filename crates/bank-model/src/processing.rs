use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::table::TableKind;

/// What happened to one output table during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutput {
    pub table: TableKind,
    pub rows: usize,
    pub columns: usize,
    /// Written file; `None` on a dry run.
    pub path: Option<PathBuf>,
    /// Hex SHA-256 of the written bytes.
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub source_rows: usize,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub tables: Vec<TableOutput>,
    pub schema_file: Option<PathBuf>,
}

impl RunReport {
    pub fn table(&self, kind: TableKind) -> Option<&TableOutput> {
        self.tables.iter().find(|output| output.table == kind)
    }

    /// True when every table has exactly `source_rows` rows.
    pub fn row_counts_match(&self) -> bool {
        self.tables
            .iter()
            .all(|output| output.rows == self.source_rows)
    }
}
