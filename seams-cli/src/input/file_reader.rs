//! Plain-file byte-stream sources

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;

/// Opens plain files as sequential byte-stream sources
pub struct FileReader;

impl FileReader {
    /// Open a file for sequential reading
    ///
    /// The returned handle is consumed by the chunk driver; the driver never
    /// seeks or closes it early.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Whether the path should be treated as a zip archive
    pub fn is_zip(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
    }
}
