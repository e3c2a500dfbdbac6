//! Record sink implementations

use anyhow::Result;

/// Trait for record sinks fed by the chunk driver
pub trait RecordWriter {
    /// Consume one delivered record
    fn write_record(&mut self, record: &[u8]) -> Result<()>;

    /// Finalize output (e.g., close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod summary;
pub mod text;

pub use json::JsonWriter;
pub use summary::SummaryWriter;
pub use text::TextWriter;
