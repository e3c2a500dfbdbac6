//! Property tests for the chunk driver and boundary strategy
//!
//! The central law: the records delivered from fixed-size incremental reads
//! must be exactly the records a one-pass split of the whole stream would
//! produce, for every read width and every read segmentation.

use proptest::prelude::*;
use seams_core::{ByteDelimiter, ChunkDriver, RecordDelimiter};
use std::io::{self, Read};

/// One-pass reference: split by the delimiter byte, dropping only a trailing
/// empty segment (a stream that ends on a boundary has no tail record).
fn reference_records(input: &[u8], delimiter: u8) -> Vec<Vec<u8>> {
    let mut records: Vec<Vec<u8>> = input
        .split(|&b| b == delimiter)
        .map(<[u8]>::to_vec)
        .collect();
    if records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }
    records
}

fn driver_records<R: Read>(source: R, chunk_size: usize, delimiter: u8) -> Vec<Vec<u8>> {
    let mut records = Vec::new();
    ChunkDriver::with_delimiter(chunk_size, ByteDelimiter::new(delimiter))
        .run(source, |record: &[u8]| {
            records.push(record.to_vec());
            Ok::<(), io::Error>(())
        })
        .expect("run should succeed");
    records
}

/// Serves the stream in caller-chosen slice lengths, exercising short reads
struct ScriptedReader {
    data: Vec<u8>,
    pos: usize,
    script: Vec<usize>,
    step: usize,
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Ok(0);
        }
        let scripted = self.script[self.step % self.script.len()].max(1);
        self.step += 1;
        let n = scripted.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

proptest! {
    /// Chunk-boundary independence: every read width delivers the same
    /// record sequence as the one-pass reference split.
    #[test]
    fn records_match_one_pass_split(
        input in proptest::collection::vec(any::<u8>(), 0..512),
        chunk_size in 1usize..64,
    ) {
        let expected = reference_records(&input, b'\n');
        let actual = driver_records(&input[..], chunk_size, b'\n');
        prop_assert_eq!(actual, expected);
    }

    /// The same law holds for arbitrary delimiter bytes, including ones
    /// that occur nowhere in the stream.
    #[test]
    fn records_match_for_any_delimiter_byte(
        input in proptest::collection::vec(any::<u8>(), 0..256),
        chunk_size in 1usize..32,
        delimiter in any::<u8>(),
    ) {
        let expected = reference_records(&input, delimiter);
        let actual = driver_records(&input[..], chunk_size, delimiter);
        prop_assert_eq!(actual, expected);
    }

    /// Short reads of arbitrary, uneven sizes never change the delivered
    /// records.
    #[test]
    fn records_survive_arbitrary_read_segmentation(
        input in proptest::collection::vec(any::<u8>(), 0..512),
        chunk_size in 1usize..48,
        script in proptest::collection::vec(1usize..16, 1..8),
    ) {
        let reader = ScriptedReader { data: input.clone(), pos: 0, script, step: 0 };
        let expected = reference_records(&input, b'\n');
        let actual = driver_records(reader, chunk_size, b'\n');
        prop_assert_eq!(actual, expected);
    }

    /// Round-trip law: re-joining the delivered records with the delimiter
    /// (restoring the trailing one when the stream ended on it) rebuilds the
    /// stream byte for byte.
    #[test]
    fn delivered_records_reconstruct_the_stream(
        input in proptest::collection::vec(any::<u8>(), 0..512),
        chunk_size in 1usize..64,
    ) {
        let records = driver_records(&input[..], chunk_size, b'\n');

        let mut rebuilt = records.join(&b'\n');
        if input.last() == Some(&b'\n') {
            rebuilt.push(b'\n');
        }
        prop_assert_eq!(rebuilt, input);
    }

    /// Applying the boundary strategy twice to the same buffer with no new
    /// data yields the same result.
    #[test]
    fn split_is_idempotent(
        buf in proptest::collection::vec(any::<u8>(), 0..256),
        delimiter in any::<u8>(),
    ) {
        let strategy = ByteDelimiter::new(delimiter);
        prop_assert_eq!(strategy.split(&buf), strategy.split(&buf));
    }

    /// A not-ready split carries the buffer through unchanged, so the caller
    /// can keep growing it.
    #[test]
    fn not_ready_split_returns_input_unchanged(
        buf in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let strategy = ByteDelimiter::new(b'\n');
        let split = strategy.split(&buf);
        if !split.ready {
            prop_assert_eq!(split.record, buf);
            prop_assert!(split.remainder.is_empty());
        }
    }
}
