use std::path::Path;

use crate::error::{AuditError, Result};
use crate::validator::ActualFileEntry;

/// Read a newline-separated list of delivered file paths.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn load_file_list(path: &Path) -> Result<Vec<ActualFileEntry>> {
    let content = std::fs::read_to_string(path).map_err(|source| AuditError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_file_list(&content))
}

/// One path per line. Blank lines and `#` comments are skipped.
#[must_use]
pub fn parse_file_list(content: &str) -> Vec<ActualFileEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| ActualFileEntry::from_path(Path::new(line)))
        .collect()
}
