//! seams: split byte streams into delimiter-bounded records

use clap::Parser;
use seams_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
