//! Strictly Rewind - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use strictly_rewind_tui::{Cli, TuiConfig, init_tracing, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = TuiConfig::load_or_default(&cli.config)?.with_overrides(cli.side, cli.log_file)?;
    init_tracing(&config)?;
    info!(config = ?config, "Configuration resolved");

    run(&config)
}
