use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};
use crate::table::{Table, TableReader, TableWriter};

use super::ReportTables;

/// File names of the exported tables, in export order.
pub const REPORT_FILE_NAMES: [&str; 5] = [
    "summary.csv",
    "missing_files.csv",
    "naming_errors.csv",
    "title_block_errors.csv",
    "all_findings.csv",
];

/// Write each report table into `dir`, creating it if needed.
/// Returns the written paths in export order.
///
/// # Errors
/// Returns an error if the directory cannot be created or a table cannot be written.
pub fn write_report_tables(
    tables: &ReportTables,
    dir: &Path,
    writer: &dyn TableWriter,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(REPORT_FILE_NAMES.len());
    for (table, file_name) in tables.tables().into_iter().zip(REPORT_FILE_NAMES) {
        let path = dir.join(file_name);
        writer.write(table, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Read a directory written by [`write_report_tables`] back into tables.
///
/// # Errors
/// Returns an error if any of the five files is absent or unreadable.
pub fn read_report_tables(dir: &Path, reader: &dyn TableReader) -> Result<ReportTables> {
    let mut tables = REPORT_FILE_NAMES
        .iter()
        .map(|file_name| reader.read(&dir.join(file_name)))
        .collect::<Result<Vec<Table>>>()?
        .into_iter();

    let mut next = || {
        tables
            .next()
            .ok_or_else(|| AuditError::Table("Report directory is incomplete".to_string()))
    };

    Ok(ReportTables {
        summary: next()?,
        missing_files: next()?,
        naming_errors: next()?,
        title_block_errors: next()?,
        all_findings: next()?,
    })
}
