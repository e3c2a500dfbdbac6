//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve input patterns to the concrete files to stream
///
/// Directories matched by a pattern are skipped; only plain files can serve
/// as byte-stream sources.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let matches = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let before = files.len();
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
        log::debug!("Pattern {pattern} matched {} file(s)", files.len() - before);
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.txt");
        fs::write(&file_path, "a\nb\n").unwrap();

        let resolved =
            resolve_patterns(&[file_path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(resolved, vec![file_path]);
    }

    #[test]
    fn test_resolve_wildcard_pattern() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        fs::write(temp_dir.path().join("two.txt"), "2").unwrap();
        fs::write(temp_dir.path().join("skip.dat"), "3").unwrap();

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().into_owned();
        let resolved = resolve_patterns(&[pattern]).unwrap();

        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[test]
    fn test_duplicates_are_removed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dup.txt");
        fs::write(&file_path, "x").unwrap();

        let literal = file_path.to_string_lossy().into_owned();
        let resolved = resolve_patterns(&[literal.clone(), literal]).unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let result = resolve_patterns(&["/nonexistent/path/*.txt".to_string()]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No files found"));
    }
}
