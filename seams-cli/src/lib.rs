//! Seams CLI library
//!
//! This library provides the command-line harness around the seams
//! chunking core: byte-stream sources (plain files, zip archive entries),
//! record sinks, and progress reporting.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
