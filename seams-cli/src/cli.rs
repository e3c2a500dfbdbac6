//! Top-level command-line parser

use anyhow::Result;
use clap::Parser;

use crate::commands::Commands;

/// Split byte streams into delimiter-bounded records with bounded memory
#[derive(Debug, Parser)]
#[command(name = "seams")]
#[command(about = "Reassemble delimiter-separated records from fixed-size reads")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch the parsed command
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
