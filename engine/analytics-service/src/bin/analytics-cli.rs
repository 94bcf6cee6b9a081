//! # Analytics CLI Binary
//!
//! Command-line interface for the player analytics and trade valuation
//! engine.

use analytics_service::cli::{Cli, CliHandler};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Create CLI handler
    let handler = CliHandler::new(cli.config.as_ref())?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(handler.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Handle command
    handler.handle_command(cli.command)?;

    Ok(())
}
