//! CLI argument definitions for the punctuality pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "punctuality",
    version,
    about = "Transit punctuality validator - Check and enrich stop arrival records",
    long_about = "Validate public transport arrival records against the reference topology.\n\n\
                  Accepted records are enriched with delay and layover and written as\n\
                  semicolon-delimited text and to a SQLite store. Rejected lines are\n\
                  kept verbatim for inspection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a punctuality file and write accepted and rejected records.
    Process(ProcessArgs),

    /// Print the built-in reference topology.
    Topology,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the semicolon-delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for outputs without an explicit path (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Accepted records output (default: <DIR>/accepted.csv).
    #[arg(long = "accepted-csv", value_name = "PATH")]
    pub accepted_csv: Option<PathBuf>,

    /// Rejected lines output (default: <DIR>/rejected.csv).
    #[arg(long = "rejected-csv", value_name = "PATH")]
    pub rejected_csv: Option<PathBuf>,

    /// SQLite database file (default: <DIR>/punctuality.sqlite).
    #[arg(long = "sqlite", value_name = "PATH", conflicts_with = "no_sqlite")]
    pub sqlite: Option<PathBuf>,

    /// JSON rejection report (default: <DIR>/rejections.json).
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Skip writing the SQLite store.
    #[arg(long = "no-sqlite")]
    pub no_sqlite: bool,

    /// Process and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
