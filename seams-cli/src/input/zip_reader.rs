//! Zip archive entries as byte-stream sources
//!
//! One logical archive entry is wired up as an ordinary sequential stream.
//! The chunk driver never learns the bytes came out of an archive; entry
//! selection happens entirely here.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Open a zip archive for entry streaming
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive: {}", path.display()))?;

    ZipArchive::new(file)
        .with_context(|| format!("Failed to read archive directory: {}", path.display()))
}

/// Find the index of the entry to stream
///
/// With a name, the entry must match exactly. Without one, the first file
/// entry wins; directory entries are never candidates.
pub fn locate_entry(archive: &mut ZipArchive<File>, name: Option<&str>) -> Result<usize> {
    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .with_context(|| format!("Failed to read archive entry {index}"))?;

        let selected = match name {
            Some(wanted) => entry.name() == wanted,
            None => !entry.is_dir(),
        };
        if selected {
            log::debug!("Selected archive entry '{}' ({} bytes)", entry.name(), entry.size());
            return Ok(index);
        }
    }

    match name {
        Some(wanted) => bail!("Entry not found in archive: {wanted}"),
        None => bail!("Archive contains no file entries"),
    }
}
