//! CLI argument definitions for csvorm.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvorm",
    version,
    about = "Map CSV rows to typed records and back",
    long_about = "Map CSV rows to typed records and back.\n\n\
                  Record types are described by JSON schema files binding each\n\
                  field to a column name and/or position, a type and an optional\n\
                  date format pattern."
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

    /// Allow cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a schema file and show its bindings and write order.
    Schema(SchemaArgs),

    /// Decode a CSV file through a schema and print the records.
    Inspect(InspectArgs),

    /// Decode a CSV file through a schema and write it back out.
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the JSON schema file.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON schema describing the records.
    #[arg(long = "schema", value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Treat the first row as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Field delimiter of the input.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Show at most this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON schema describing the records.
    #[arg(long = "schema", value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Output CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Treat the first input row as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Write no header row.
    #[arg(long = "no-output-header")]
    pub no_output_header: bool,

    /// Field delimiter of the input.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Field delimiter of the output (defaults to the input delimiter).
    #[arg(long = "output-delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub output_delimiter: Option<u8>,

    /// Output column names in order (comma separated); declared positions
    /// are used when omitted.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Vec<String>,
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

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match raw.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{raw}'")),
        },
    }
}
