//! Run report and output options.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use bank_model::RunReport;

use crate::error::{OutputError, Result};

/// Optional artifacts written next to the tables.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Where to write the DDL schema, if anywhere.
    pub write_schema: Option<PathBuf>,
    /// Where to write the JSON run report, if anywhere.
    pub report: Option<PathBuf>,
}

impl OutputOptions {
    #[must_use]
    pub fn with_schema(mut self, path: Option<PathBuf>) -> Self {
        self.write_schema = path;
        self
    }

    #[must_use]
    pub fn with_report(mut self, path: Option<PathBuf>) -> Self {
        self.report = path;
        self
    }
}

/// Writes `report` as pretty-printed JSON.
pub fn write_run_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|source| OutputError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "run report written");
    Ok(())
}
