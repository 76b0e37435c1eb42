//! CLI argument definitions for the country code sorter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use isocodes_model::SortKey;
use isocodes_cli::pipeline::{DEFAULT_ARCHIVE, DEFAULT_ENTRY, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "isocodes",
    version,
    about = "Sort and reformat an ISO country code list",
    long_about = "Read ISO country names and codes from a CSV file or a zip archive entry,\n\
                  reverse \"LAST, FIRST\" official names, and list the entries ordered by\n\
                  name length and code."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the sorted, title-cased report to stdout.
    Report(SourceArgs),

    /// Write the sorted entries to a CSV file.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Zip archive holding the country list.
    #[arg(long = "archive", value_name = "PATH", default_value = DEFAULT_ARCHIVE)]
    pub archive: PathBuf,

    /// Name of the CSV entry inside the archive.
    #[arg(long = "entry", value_name = "NAME", default_value = DEFAULT_ENTRY)]
    pub entry: String,

    /// Read a plain CSV file instead of an archive entry.
    #[arg(long = "input", value_name = "PATH", conflicts_with_all = ["archive", "entry"])]
    pub input: Option<PathBuf>,

    /// Skip the first row and read columns by position as (name, code).
    ///
    /// By default the header row must name `country` and `code` columns.
    #[arg(long = "positional")]
    pub positional: bool,

    /// Additional key to leave out of the output, as LENGTH:CODE (repeatable).
    #[arg(long = "exclude", value_name = "LENGTH:CODE")]
    pub exclude: Vec<SortKey>,

    /// Drop the built-in exclusion of the duplicate Holy See entry (29:VA).
    #[arg(long = "no-default-exclusions")]
    pub no_default_exclusions: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// CSV file to write; an existing file is replaced.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
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
