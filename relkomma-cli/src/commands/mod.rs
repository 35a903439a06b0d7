//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use relkomma_core::{get_tables, RuleId};

pub mod check;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check tagged sentences for missing commas before relative clauses
    Check(check::CheckArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the rule identities
    Rules,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Rules => {
                let tables = get_tables("de")?;
                let messages = tables.messages();
                println!("Rules ({}, {}):", messages.category_name, messages.category_id);
                for id in RuleId::ALL {
                    println!("  {:<30} {}", id.as_str(), id.description(messages));
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text  one line per match with the corrected sentence");
                println!("  json  array of sentences with their matches");
            }
        }
        Ok(())
    }
}
