//! Aggregate summary sink
//!
//! Prints what a per-record log would show, condensed to totals.

use super::RecordWriter;
use anyhow::Result;
use std::io::Write;

/// Summary sink - counts records instead of echoing them
pub struct SummaryWriter<W: Write> {
    writer: W,
    records: u64,
    bytes: u64,
    longest: usize,
}

impl<W: Write> SummaryWriter<W> {
    /// Create a new summary sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: 0,
            bytes: 0,
            longest: 0,
        }
    }
}

impl<W: Write> RecordWriter for SummaryWriter<W> {
    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        self.records += 1;
        self.bytes += record.len() as u64;
        self.longest = self.longest.max(record.len());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "records: {}", self.records)?;
        writeln!(self.writer, "payload bytes: {}", self.bytes)?;
        writeln!(self.writer, "longest record: {} bytes", self.longest)?;
        self.writer.flush()?;
        Ok(())
    }
}
