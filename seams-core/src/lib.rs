//! Bounded-memory, delimiter-based stream chunking
//!
//! This crate reassembles delimiter-separated records from fixed-size reads
//! over an arbitrary-length byte stream and hands each complete record to a
//! caller-supplied handler. Memory use is bounded by the read width plus the
//! longest single record, never by the total stream length.

#![warn(missing_docs)]

pub mod delimiter;
pub mod driver;
pub mod error;

// Re-export key types
pub use delimiter::{ByteDelimiter, RecordDelimiter, Split};
pub use driver::{ChunkDriver, RecordHandler, RunSummary};
pub use error::{BoxError, ChunkError, Result};
