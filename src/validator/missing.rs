use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::normalize::normalize_for_comparison;
use crate::table::Table;

use super::observer::{NoopObserver, ValidationObserver};
use super::{percentage, round2};

/// A file the register says should exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedFileEntry {
    pub expected_file: String,
    /// 1-based row in the register table (the first data row is row 2).
    pub register_row: usize,
}

/// A file physically present in the delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActualFileEntry {
    pub name: String,
    pub path: String,
    pub extension: String,
}

impl ActualFileEntry {
    /// Build an entry from a bare file name and the path it was found at.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        let extension = name
            .rfind('.')
            .map_or_else(String::new, |idx| name[idx + 1..].to_lowercase());
        Self {
            name,
            path: path.into(),
            extension,
        }
    }

    /// Build an entry from a filesystem path; the name is its final component.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(name, path.to_string_lossy().replace('\\', "/"))
    }

    /// Directory part of `path`, `""` for a bare name.
    #[must_use]
    pub fn folder_path(&self) -> String {
        Path::new(&self.path)
            .parent()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFileResult {
    pub expected_file: String,
    pub found: bool,
    pub register_row: usize,
    pub actual_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingFilesSummary {
    pub total_expected: usize,
    pub found_count: usize,
    pub missing_count: usize,
    pub missing_percentage: f64,
    pub missing_files: Vec<MissingFileResult>,
    pub extra_files: Vec<ActualFileEntry>,
}

impl MissingFilesSummary {
    /// `100 - missing_percentage`: the share found, on the 0-100 "good" scale.
    #[must_use]
    pub fn found_percentage(&self) -> f64 {
        round2(100.0 - self.missing_percentage)
    }

    pub fn missing(&self) -> impl Iterator<Item = &MissingFileResult> {
        self.missing_files.iter().filter(|r| !r.found)
    }
}

/// Reconciles the register's expected file list against the files on disk.
pub struct MissingFilesValidator {
    expected: Vec<ExpectedFileEntry>,
    actual: Vec<ActualFileEntry>,
    observer: Box<dyn ValidationObserver>,
}

impl Default for MissingFilesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingFilesValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected: Vec::new(),
            actual: Vec::new(),
            observer: Box::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Take the file name in `column` of every data row; blank cells are skipped.
    pub fn load_expected_files(&mut self, register: &Table, column: usize) {
        self.expected = register
            .data_rows()
            .filter_map(|(index, row)| {
                let name = row
                    .get(column)
                    .map(|c| c.as_text().trim().to_string())
                    .unwrap_or_default();
                (!name.is_empty()).then_some(ExpectedFileEntry {
                    expected_file: name,
                    register_row: index + 1,
                })
            })
            .collect();
    }

    pub fn load_actual_files(&mut self, files: Vec<ActualFileEntry>) {
        self.actual = files;
    }

    #[must_use]
    pub fn expected_files(&self) -> &[ExpectedFileEntry] {
        &self.expected
    }

    #[must_use]
    pub fn validate(&self) -> MissingFilesSummary {
        // First actual file per key wins
        let mut actual_by_key: IndexMap<String, usize> = IndexMap::new();
        for (index, file) in self.actual.iter().enumerate() {
            actual_by_key
                .entry(normalize_for_comparison(&file.name))
                .or_insert(index);
        }

        let missing_files: Vec<MissingFileResult> = self
            .expected
            .iter()
            .map(|entry| {
                let matched = actual_by_key
                    .get(&normalize_for_comparison(&entry.expected_file))
                    .map(|&idx| &self.actual[idx]);
                let result = MissingFileResult {
                    expected_file: entry.expected_file.clone(),
                    found: matched.is_some(),
                    register_row: entry.register_row,
                    actual_path: matched.map(|f| f.path.clone()),
                };
                self.observer.expected_file_checked(&result);
                result
            })
            .collect();

        let expected_keys: HashSet<String> = self
            .expected
            .iter()
            .map(|e| normalize_for_comparison(&e.expected_file))
            .collect();
        let extra_files: Vec<ActualFileEntry> = self
            .actual
            .iter()
            .filter(|f| !expected_keys.contains(&normalize_for_comparison(&f.name)))
            .cloned()
            .collect();

        let total_expected = missing_files.len();
        let found_count = missing_files.iter().filter(|r| r.found).count();
        let missing_count = total_expected - found_count;

        self.observer.finished("missing-files", total_expected);

        MissingFilesSummary {
            total_expected,
            found_count,
            missing_count,
            missing_percentage: percentage(missing_count, total_expected),
            missing_files,
            extra_files,
        }
    }
}

#[cfg(test)]
#[path = "missing_tests.rs"]
mod tests;
