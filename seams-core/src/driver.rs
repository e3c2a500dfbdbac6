//! Chunk driver: fixed-size reads in, whole records out
//!
//! The driver pulls fixed-size blocks from a sequential byte source,
//! accumulates them, and applies a [`RecordDelimiter`] until a complete
//! record is available. Records are handed to the caller's handler one at a
//! time, in stream order, before any further bytes are read.

use std::io::{ErrorKind, Read};
use std::mem;

use crate::delimiter::{ByteDelimiter, RecordDelimiter};
use crate::error::{BoxError, ChunkError, Result};

/// Per-record callback capability
///
/// The handler is invoked synchronously, once per record, with the boundary
/// byte already removed. A failure aborts the whole run; no further records
/// are delivered afterwards.
pub trait RecordHandler {
    /// Consume one complete record
    fn handle(&mut self, record: &[u8]) -> std::result::Result<(), BoxError>;
}

impl<F, E> RecordHandler for F
where
    F: FnMut(&[u8]) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    fn handle(&mut self, record: &[u8]) -> std::result::Result<(), BoxError> {
        self(record).map_err(Into::into)
    }
}

/// Counters for one completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records delivered to the handler
    pub records: u64,
    /// Total payload bytes delivered, boundary bytes excluded
    pub bytes: u64,
}

/// Drives a byte-stream source through a boundary strategy
///
/// The driver owns only its configuration; all buffering state lives in the
/// [`run`](Self::run) call frame, so one driver value can serve any number
/// of sequential runs.
///
/// # Example
///
/// ```
/// use seams_core::ChunkDriver;
///
/// let mut records = Vec::new();
/// let summary = ChunkDriver::new(4)
///     .run(&b"alpha\nbeta\ngamma"[..], |record: &[u8]| {
///         records.push(record.to_vec());
///         Ok::<(), std::io::Error>(())
///     })
///     .unwrap();
///
/// assert_eq!(records, vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]);
/// assert_eq!(summary.records, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkDriver<D = ByteDelimiter> {
    chunk_size: usize,
    delimiter: D,
}

impl ChunkDriver<ByteDelimiter> {
    /// Driver with the given read width and the default line-feed boundary
    pub fn new(chunk_size: usize) -> Self {
        Self::with_delimiter(chunk_size, ByteDelimiter::default())
    }
}

impl<D: RecordDelimiter> ChunkDriver<D> {
    /// Driver with the given read width and boundary strategy
    pub fn with_delimiter(chunk_size: usize, delimiter: D) -> Self {
        Self {
            chunk_size,
            delimiter,
        }
    }

    /// The configured read width in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Consume `source` to end-of-stream, delivering each record to `handler`
    ///
    /// Reads at most `chunk_size` bytes at a time; memory is bounded by the
    /// read width plus the longest single record. End-of-stream terminates
    /// the run normally, flushing any buffered tail as a final record. Any
    /// other read failure, and any handler failure, aborts the run with the
    /// buffered bytes discarded.
    pub fn run<R, H>(&self, mut source: R, mut handler: H) -> Result<RunSummary>
    where
        R: Read,
        H: RecordHandler,
    {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidChunkSize);
        }

        let mut summary = RunSummary::default();
        let mut accumulation: Vec<u8> = Vec::with_capacity(self.chunk_size);
        let mut block = vec![0u8; self.chunk_size];
        let mut at_end = false;

        loop {
            // Carve records out of what is already buffered before touching
            // the source again; a remainder seeds the next evaluation.
            let split = self.delimiter.split(&accumulation);
            if split.ready {
                accumulation = split.remainder;
                self.deliver(split.record, &mut handler, &mut summary)?;
                continue;
            }

            if at_end {
                // The stream is exhausted; whatever is left is the final
                // record. A tail of zero bytes means the stream ended on a
                // boundary and there is nothing more to deliver.
                if !accumulation.is_empty() {
                    let tail = mem::take(&mut accumulation);
                    self.deliver(tail, &mut handler, &mut summary)?;
                }
                return Ok(summary);
            }

            match source.read(&mut block) {
                Ok(0) => at_end = true,
                Ok(n) => accumulation.extend_from_slice(&block[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ChunkError::Io(e)),
            }
        }
    }

    fn deliver<H: RecordHandler>(
        &self,
        mut record: Vec<u8>,
        handler: &mut H,
        summary: &mut RunSummary,
    ) -> Result<()> {
        // Boundary bytes cannot survive the split, but strip them anyway so
        // a foreign delimiter implementation cannot leak them through.
        self.delimiter.strip(&mut record);

        handler.handle(&record).map_err(|source| ChunkError::Handler {
            record: summary.records,
            source,
        })?;

        summary.records += 1;
        summary.bytes += record.len() as u64;
        Ok(())
    }
}
