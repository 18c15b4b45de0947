//! Collecting the delivered files: a directory walk or a prepared file list.

mod file_list;
mod filter;

pub use file_list::{load_file_list, parse_file_list};
pub use filter::{DeliveryFilter, DeliveryScope, ExtensionSet};

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AuditError, Result};
use crate::validator::ActualFileEntry;

/// Trait for finding the files of a delivery.
pub trait FileScanner {
    /// Scan a directory and return every matching file, sorted by path.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    fn scan(&self, root: &Path) -> Result<Vec<ActualFileEntry>>;
}

/// Walks a delivery folder. Entry paths are relative to the scanned root.
pub struct DirectoryScanner<F: DeliveryFilter> {
    filter: F,
}

impl<F: DeliveryFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<ActualFileEntry> {
        let mut files: Vec<ActualFileEntry> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(root).ok()?.to_path_buf();
                self.filter
                    .admits(&relative)
                    .then(|| ActualFileEntry::from_path(&relative))
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }
}

impl<F: DeliveryFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<ActualFileEntry>> {
        if !root.is_dir() {
            return Err(AuditError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not a directory",
                ),
            });
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
