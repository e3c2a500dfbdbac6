//! Record boundary strategies
//!
//! A boundary strategy decides whether an accumulation buffer holds at least
//! one complete record, and if so where the record ends. Keeping this
//! decision separate from the read loop lets the same driver serve other
//! boundary policies (length-prefixed frames, multi-byte separators) without
//! touching the driver itself.

/// Outcome of applying a boundary strategy to an accumulation buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Whether a complete record boundary was found
    pub ready: bool,
    /// The delimited record, or the unchanged input when not ready
    pub record: Vec<u8>,
    /// Bytes past the first boundary, to seed the next evaluation
    pub remainder: Vec<u8>,
}

impl Split {
    /// A not-ready result carrying the input through unchanged
    pub fn incomplete(buf: &[u8]) -> Self {
        Split {
            ready: false,
            record: buf.to_vec(),
            remainder: Vec::new(),
        }
    }
}

/// Decides whether an accumulation buffer contains a complete record
///
/// Implementations must be pure: calling [`split`](Self::split) twice on the
/// same buffer with no new data yields the same result, and a not-ready
/// result returns the input unchanged so the caller can keep growing it.
pub trait RecordDelimiter {
    /// Split `buf` into the first complete record and the remainder
    ///
    /// The boundary itself belongs to neither part. When no boundary is
    /// present the result is not ready and the remainder is empty.
    fn split(&self, buf: &[u8]) -> Split;

    /// Remove any boundary bytes still embedded in a record before delivery
    fn strip(&self, record: &mut Vec<u8>);
}

/// Single-byte boundary strategy, line feed by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteDelimiter {
    byte: u8,
}

impl ByteDelimiter {
    /// Create a strategy splitting on the given byte value
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }

    /// The configured boundary byte
    pub fn byte(&self) -> u8 {
        self.byte
    }
}

impl Default for ByteDelimiter {
    fn default() -> Self {
        Self { byte: b'\n' }
    }
}

impl RecordDelimiter for ByteDelimiter {
    fn split(&self, buf: &[u8]) -> Split {
        let Some(pos) = buf.iter().position(|&b| b == self.byte) else {
            return Split::incomplete(buf);
        };

        // Everything past the first boundary is carried verbatim so that no
        // byte is lost or duplicated across evaluations. A remainder that
        // still holds a boundary is split again before the next read.
        Split {
            ready: true,
            record: buf[..pos].to_vec(),
            remainder: buf[pos + 1..].to_vec(),
        }
    }

    fn strip(&self, record: &mut Vec<u8>) {
        record.retain(|&b| b != self.byte);
    }
}
