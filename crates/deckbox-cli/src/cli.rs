//! CLI argument definitions for the Deckbox loader.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "deckbox-loader",
    version,
    about = "Create an SQLite database from a Deckbox export",
    long_about = "Create an SQLite database from a Deckbox inventory export.\n\n\
                  Infers the cards table schema from the export's header row and\n\
                  loads every data row with run-start bookkeeping timestamps."
)]
pub struct Cli {
    /// Path to the Deckbox CSV export to load.
    #[arg(short = 'f', long = "input-file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Path for the SQLite database to create (must not already exist).
    #[arg(
        short = 'd',
        long = "database-file",
        value_name = "PATH",
        default_value = "database.sqlite3"
    )]
    pub database_file: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,
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
