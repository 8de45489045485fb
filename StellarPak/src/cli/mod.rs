//! StellarPak CLI - command-line mod layout checking and repair

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "stellarpak")]
#[command(about = "StellarPak: mod layout tools for Stellar Blade", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the StellarPak CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
