//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use seams_core::{ByteDelimiter, ChunkDriver, RunSummary};

use crate::error::CliError;
use crate::input::{self, FileReader};
use crate::output::{self, RecordWriter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fixed read width in bytes
    #[arg(short, long, value_name = "BYTES", default_value_t = 128)]
    pub chunk_size: usize,

    /// Record delimiter: a single character, an escape (\n, \t, \r, \0), or 0xNN
    #[arg(short, long, value_name = "BYTE", default_value = "\\n", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Archive entry to stream from zip inputs (default: first file entry)
    #[arg(long, value_name = "NAME")]
    pub zip_entry: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    Text,
    /// JSON array of records with metadata
    Json,
    /// Aggregate record and byte counts only
    Summary,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting record processing");
        log::debug!("Arguments: {:?}", self);

        let files = input::resolve_patterns(&self.input)?;
        log::info!("Processing {} input file(s)", files.len());

        let driver =
            ChunkDriver::with_delimiter(self.chunk_size, ByteDelimiter::new(self.delimiter));
        let mut writer = self.make_writer()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut totals = RunSummary::default();
        for path in &files {
            let summary = self
                .process_file(path, &driver, writer.as_mut())
                .with_context(|| format!("Failed to process {}", path.display()))?;

            totals.records += summary.records;
            totals.bytes += summary.bytes;
            progress.file_completed(&path.display().to_string(), summary.records);
        }
        progress.finish();

        writer.finish()?;
        log::info!(
            "Delivered {} record(s), {} payload byte(s)",
            totals.records,
            totals.bytes
        );

        Ok(())
    }

    /// Run the chunk driver over one input, plain or archived
    fn process_file(
        &self,
        path: &Path,
        driver: &ChunkDriver,
        writer: &mut dyn RecordWriter,
    ) -> Result<RunSummary> {
        if FileReader::is_zip(path) {
            let mut archive = input::open_archive(path)?;
            let index = input::locate_entry(&mut archive, self.zip_entry.as_deref())?;
            let entry = archive
                .by_index(index)
                .with_context(|| format!("Failed to open archive entry {index}"))?;

            log::debug!("Streaming archive entry '{}'", entry.name());
            return run_driver(driver, entry, writer);
        }

        if self.zip_entry.is_some() {
            log::warn!(
                "--zip-entry ignored for non-archive input {}",
                path.display()
            );
        }

        let file = FileReader::open(path)?;
        run_driver(driver, file, writer)
    }

    /// Build the record sink for the selected format and output target
    fn make_writer(&self) -> Result<Box<dyn RecordWriter>> {
        use std::fs::File;
        use std::io::{self, Write};

        let sink: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(output::TextWriter::new(sink)),
            OutputFormat::Json => Box::new(output::JsonWriter::new(sink)),
            OutputFormat::Summary => Box::new(output::SummaryWriter::new(sink)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Feed one byte-stream source through the driver into the sink
fn run_driver<R: Read>(
    driver: &ChunkDriver,
    source: R,
    writer: &mut dyn RecordWriter,
) -> Result<RunSummary> {
    driver
        .run(source, |record: &[u8]| writer.write_record(record))
        .map_err(|err| match err {
            seams_core::ChunkError::InvalidChunkSize => {
                anyhow::Error::new(CliError::ConfigError(err.to_string()))
            }
            other => anyhow::Error::new(CliError::ProcessingError(other.to_string())),
        })
}

/// Parse the delimiter argument into a single byte value
fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value {
        "\\n" => return Ok(b'\n'),
        "\\t" => return Ok(b'\t'),
        "\\r" => return Ok(b'\r'),
        "\\0" => return Ok(b'\0'),
        _ => {}
    }

    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16)
            .map_err(|_| format!("invalid hex byte literal: {value}"));
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be one ASCII character, an escape, or 0xNN (got {value:?})"
        )),
    }
}
