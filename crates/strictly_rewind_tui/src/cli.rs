//! Command-line interface for strictly_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Play tic-tac-toe in the terminal and rewind to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "strictly_rewind.toml")]
    pub config: PathBuf,

    /// Board side length, overriding the config file
    #[arg(long)]
    pub side: Option<usize>,

    /// Log file path, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
