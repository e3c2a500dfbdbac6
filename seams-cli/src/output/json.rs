//! JSON record sink

use super::RecordWriter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON sink - collects records and emits one array on finish
pub struct JsonWriter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordData {
    /// 0-based position in the delivery order
    pub index: usize,
    /// The record content, lossily decoded for display
    pub text: String,
    /// Record length in bytes
    pub length: usize,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> RecordWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        self.records.push(RecordData {
            index: self.records.len(),
            text: String::from_utf8_lossy(record).into_owned(),
            length: record.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_indexed_records() {
        let mut buffer = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buffer);
            writer.write_record(b"alpha").unwrap();
            writer.write_record(b"beta").unwrap();
            writer.finish().unwrap();
        }

        let parsed: Vec<RecordData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].index, 0);
        assert_eq!(parsed[0].text, "alpha");
        assert_eq!(parsed[1].length, 4);
    }

    #[test]
    fn test_empty_run_emits_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buffer);
            writer.finish().unwrap();
        }

        let parsed: Vec<RecordData> = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_length_counts_bytes_not_lossy_chars() {
        let mut buffer = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buffer);
            writer.write_record(&[0xff, b'a']).unwrap();
            writer.finish().unwrap();
        }

        let parsed: Vec<RecordData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0].length, 2);
    }
}
