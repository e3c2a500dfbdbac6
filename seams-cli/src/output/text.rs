//! Plain text record sink

use super::RecordWriter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text sink - writes one record per line
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextWriter<io::Stdout> {
    /// Create a sink that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RecordWriter for TextWriter<W> {
    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        // Records are raw bytes; write them through untouched.
        self.writer.write_all(record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
