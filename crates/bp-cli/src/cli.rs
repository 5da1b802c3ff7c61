//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Busiest driver break period finder.
///
/// Reads break records formatted as `hh:mmhh:mm`, one per line, and after
/// each record reports the stretch of the day with the most drivers on a
/// break at once.
#[derive(Debug, Parser)]
#[command(name = "breakpeak", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print each report as a JSON object.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// Without a subcommand the program starts an interactive session.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read input from FILE, then continue interactively.
    Filename {
        /// File with one break record per line.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
