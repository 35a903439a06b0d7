//! relkomma: flag missing commas before German relative clauses

use anyhow::Result;
use clap::Parser;
use relkomma_cli::commands::Commands;

/// Check tagged German sentences for missing commas before relative clauses
#[derive(Debug, Parser)]
#[command(name = "relkomma", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
