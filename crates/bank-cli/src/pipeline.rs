//! The split pipeline: ingest, transform, output.
//!
//! Each stage runs inside its own span and logs its row counts and duration.
//! Any stage error aborts the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, info_span, trace};

use bank_ingest::{IngestOptions, SourceTable, read_source_table};
use bank_model::{RunReport, TableKind, TableOutput};
use bank_output::{
    OutputOptions, dry_run_outputs, format_row, write_run_report, write_schema_file,
    write_split_outputs,
};
use bank_transform::{SplitTables, split_source_table};

use crate::logging::redact_value;

/// Rows traced per table when row logging is enabled.
const TRACE_ROW_LIMIT: usize = 5;

/// Everything one split run needs.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub ingest: IngestOptions,
    pub output: OutputOptions,
}

impl SplitRequest {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            dry_run: false,
            ingest: IngestOptions::default(),
            output: OutputOptions::default(),
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = output;
        self
    }
}

/// Loads and types the source file.
pub fn ingest(input: &Path, options: &IngestOptions) -> Result<SourceTable> {
    let start = Instant::now();
    let source = read_source_table(input, options)
        .with_context(|| format!("ingest {}", input.display()))?;
    info!(
        rows = source.height(),
        columns = source.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(source)
}

/// Builds the three output tables.
pub fn transform(source: &SourceTable) -> Result<SplitTables> {
    let start = Instant::now();
    let tables = split_source_table(&source.data).context("transform source table")?;
    if !tables.row_counts_match(source.height()) {
        bail!("output tables do not preserve the {} source rows", source.height());
    }
    info!(
        rows = source.height(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    for (kind, frame) in tables.iter() {
        trace_rows(kind, frame);
    }
    Ok(tables)
}

/// Writes the tables and any requested side artifacts.
pub fn output(
    tables: &SplitTables,
    output_dir: &Path,
    dry_run: bool,
    options: &OutputOptions,
) -> Result<(Vec<TableOutput>, Option<PathBuf>)> {
    let start = Instant::now();
    let outputs = if dry_run {
        info!("dry run, no files written");
        dry_run_outputs(tables)
    } else {
        write_split_outputs(tables, output_dir)
            .with_context(|| format!("write tables to {}", output_dir.display()))?
    };
    let schema_file = match &options.write_schema {
        Some(path) if !dry_run => {
            write_schema_file(path).with_context(|| format!("write schema {}", path.display()))?;
            Some(path.clone())
        }
        _ => None,
    };
    info!(
        tables = outputs.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok((outputs, schema_file))
}

/// Runs ingest, transform and output, then writes the run report if requested.
pub fn run_split(request: &SplitRequest) -> Result<RunReport> {
    let span = info_span!("split", input = %request.input.display());
    let _guard = span.enter();

    let source = info_span!("ingest").in_scope(|| ingest(&request.input, &request.ingest))?;
    let tables = info_span!("transform").in_scope(|| transform(&source))?;
    let (outputs, schema_file) = info_span!("output").in_scope(|| {
        output(
            &tables,
            &request.output_dir,
            request.dry_run,
            &request.output,
        )
    })?;

    let report = RunReport {
        input: request.input.clone(),
        source_rows: source.height(),
        output_dir: request.output_dir.clone(),
        dry_run: request.dry_run,
        tables: outputs,
        schema_file,
    };
    // Written on dry runs too.
    if let Some(path) = &request.output.report {
        write_run_report(&report, path)
            .with_context(|| format!("write run report {}", path.display()))?;
    }
    Ok(report)
}

fn trace_rows(kind: TableKind, frame: &DataFrame) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    for idx in 0..frame.height().min(TRACE_ROW_LIMIT) {
        let row = format_row(frame, idx).unwrap_or_default();
        trace!(table = %kind, row = idx + 1, values = %redact_value(&row), "output row");
    }
}
