//! CLI argument definitions for the sanctions cleansing pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sanctions-cleanse",
    version,
    about = "Sanctions record cleanser - canonicalize a sanctioned-entity export",
    long_about = "Canonicalize a tabular sanctioned-entity export.\n\n\
                  Removes exact duplicate rows, merges name and address parts,\n\
                  normalizes dates of birth to DD-MM-YYYY, extracts associated\n\
                  countries, projects onto the canonical column set and reports\n\
                  data-quality findings."
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
    /// Run one batch over an input export and write the canonical set.
    Run(RunArgs),

    /// List the canonical output columns.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the source CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination path for the canonical CSV.
    #[arg(
        long = "output",
        value_name = "PATH",
        required_unless_present = "dry_run"
    )]
    pub output: Option<PathBuf>,

    /// Assess and report without writing the output file.
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
