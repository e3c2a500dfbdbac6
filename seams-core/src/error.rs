//! Error types for chunking runs

use thiserror::Error;

/// Boxed error accepted back from record handlers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a chunking run
///
/// End-of-stream is not represented here: it is the normal termination
/// signal, and the driver flushes any buffered tail as a final record
/// instead of reporting an error.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// The configured read width is zero
    #[error("chunk size must be positive")]
    InvalidChunkSize,

    /// A read from the byte-stream source failed
    #[error("read from source failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record handler rejected a record
    #[error("handler failed on record {record}: {source}")]
    Handler {
        /// 0-based index of the record the handler rejected
        record: u64,
        /// The handler's own failure
        source: BoxError,
    },
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chunk_size_display() {
        assert_eq!(
            ChunkError::InvalidChunkSize.to_string(),
            "chunk size must be positive"
        );
    }

    #[test]
    fn test_io_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ChunkError::from(io);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_handler_error_reports_record_index() {
        let err = ChunkError::Handler {
            record: 2,
            source: "record rejected".into(),
        };
        assert_eq!(
            err.to_string(),
            "handler failed on record 2: record rejected"
        );
    }
}
