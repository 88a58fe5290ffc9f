use anyhow::Result;
use comfy_table::Table;

use bank_cli::pipeline::{SplitRequest, run_split as run_split_pipeline};
use bank_ingest::IngestOptions;
use bank_model::table::{CAMPAIGN_ID, LAST_CONTACT_DATE};
use bank_model::{RunReport, TableKind};
use bank_output::{OutputOptions, schema_ddl, table_ddl};

use crate::cli::{SchemaArgs, SplitArgs, TableArg};
use crate::summary::apply_table_style;

pub fn run_split(args: &SplitArgs) -> Result<RunReport> {
    let request = SplitRequest::new(&args.input, &args.output_dir)
        .with_dry_run(args.dry_run)
        .with_ingest(IngestOptions::default().with_max_file_size(args.max_file_size))
        .with_output(
            OutputOptions::default()
                .with_schema(args.schema_out.clone())
                .with_report(args.report.clone()),
        );
    run_split_pipeline(&request)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    match args.table {
        Some(table) => print!("{}", table_ddl(table_kind(table))),
        None => print!("{}", schema_ddl()),
    }
    Ok(())
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Column", "Source"]);
    apply_table_style(&mut table);
    for kind in TableKind::ALL {
        for (column, source) in column_sources(kind) {
            table.add_row(vec![kind.as_str(), column, source]);
        }
    }
    println!("{table}");
    Ok(())
}

fn table_kind(arg: TableArg) -> TableKind {
    match arg {
        TableArg::Client => TableKind::Client,
        TableArg::Campaign => TableKind::Campaign,
        TableArg::Economics => TableKind::Economics,
    }
}

/// Output columns of `kind` paired with where their values come from.
fn column_sources(kind: TableKind) -> Vec<(&'static str, &'static str)> {
    kind.columns()
        .iter()
        .map(|&column| {
            let source = match column {
                LAST_CONTACT_DATE => "month + day (2022)",
                CAMPAIGN_ID => "-",
                _ => kind.renamed_from(column).unwrap_or(column),
            };
            (column, source)
        })
        .collect()
}
