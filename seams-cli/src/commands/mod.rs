//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split input streams into records and feed them to a sink
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("text     one record per line");
                println!("json     array of {{index, text, length}} objects");
                println!("summary  aggregate record and byte counts");
            }
        }
        Ok(())
    }
}
