//! CLI argument definitions for `bank-split`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bank_ingest::MAX_CSV_FILE_SIZE;

#[derive(Parser)]
#[command(
    name = "bank-split",
    version,
    about = "Split the bank marketing dataset into client, campaign and economics tables",
    long_about = "Split bank_marketing.csv into client.csv, campaign.csv and economics.csv.\n\n\
                  Values are cleaned and encoded on the way; the matching PostgreSQL\n\
                  schema is available through the `schema` command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split the source file into the three output tables.
    Split(SplitArgs),

    /// Print the PostgreSQL schema for the output tables.
    Schema(SchemaArgs),

    /// List the source-to-output column mapping of every table.
    Columns,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Source CSV file.
    #[arg(value_name = "INPUT", default_value = "bank_marketing.csv")]
    pub input: PathBuf,

    /// Directory for client.csv, campaign.csv and economics.csv.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Run ingest and transform without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the schema DDL to this file.
    #[arg(long = "schema-out", value_name = "PATH")]
    pub schema_out: Option<PathBuf>,

    /// Write a JSON run report to this file.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Refuse source files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CSV_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Print only this table's block.
    #[arg(long = "table", value_enum)]
    pub table: Option<TableArg>,
}

/// CLI table choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TableArg {
    Client,
    Campaign,
    Economics,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
