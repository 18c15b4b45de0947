use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{AuditError, Result};

use super::{Cell, Table};

/// Trait for loading a [`Table`] from a tabular file.
pub trait TableReader {
    /// Read every row of the file, header row included.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not valid tabular data.
    fn read(&self, path: &Path) -> Result<Table>;
}

/// Trait for writing a [`Table`] to a tabular file.
pub trait TableWriter {
    /// Write every row of the table.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    fn write(&self, table: &Table, path: &Path) -> Result<()>;
}

/// Reads comma- (or otherwise) delimited text files. Row widths may vary.
#[derive(Debug, Clone, Copy)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableReader {
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: b',' }
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse tabular data from any reader. The table takes `name`.
    ///
    /// # Errors
    /// Returns a CSV error (attributed to `source_path`) if a record cannot be decoded.
    pub fn read_from<R: std::io::Read>(
        &self,
        name: &str,
        source_path: &Path,
        input: R,
    ) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut table = Table::new(name);
        for record in reader.records() {
            let record = record.map_err(|source| AuditError::Csv {
                path: source_path.to_path_buf(),
                source,
            })?;
            table.rows.push(record.iter().map(Cell::parse).collect());
        }
        Ok(table)
    }
}

impl TableReader for CsvTableReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|source| AuditError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.read_from(&name, path, file)
    }
}

/// Writes tables as RFC 4180 CSV, one record per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Serialize a table into an in-memory CSV string.
    ///
    /// # Errors
    /// Returns an error if a record cannot be encoded.
    pub fn write_to_string(&self, table: &Table) -> Result<String> {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
        Self::write_rows(&mut writer, table, Path::new(&table.name))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| AuditError::Table(format!("Failed to flush CSV buffer: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| AuditError::Table(format!("CSV output is not UTF-8: {e}")))
    }

    fn write_rows<W: std::io::Write>(
        writer: &mut csv::Writer<W>,
        table: &Table,
        path: &Path,
    ) -> Result<()> {
        for row in &table.rows {
            let record: Vec<String> = row.iter().map(Cell::as_text).collect();
            // csv rejects a zero-field record; an empty row still occupies a line
            let record = if record.is_empty() {
                vec![String::new()]
            } else {
                record
            };
            writer
                .write_record(&record)
                .map_err(|source| AuditError::Csv {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| AuditError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        Self::write_rows(&mut writer, table, path)
    }
}

#[cfg(test)]
#[path = "csv_io_tests.rs"]
mod tests;
