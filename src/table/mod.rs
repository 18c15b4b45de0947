//! Plain tabular data: the shape every rule table, register and export arrives in.
//!
//! Column meaning is positional. Absent cells read as [`Cell::Blank`], so short
//! rows never fail a lookup.

mod csv_io;

pub use csv_io::{CsvTableReader, CsvTableWriter, TableReader, TableWriter};

use serde::Serialize;

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    #[default]
    Blank,
}

static BLANK: Cell = Cell::Blank;

impl Cell {
    /// Classify raw text the way a spreadsheet reader would.
    ///
    /// Only values that render back to the same text become numbers, so `"002"` and
    /// revision codes like `"1.10"` stay text.
    /// Whitespace-only text is kept (a single space is a legal delimiter).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Blank;
        }
        let trimmed = raw.trim();
        if looks_numeric(trimmed)
            && let Ok(n) = trimmed.parse::<f64>()
            && n.is_finite()
            && format_number(n) == trimmed
        {
            return Self::Number(n);
        }
        Self::Text(raw.to_string())
    }

    /// Render any cell as a string. Integral numbers drop the trailing `.0`.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Blank => String::new(),
        }
    }

    /// Returns the string only when the cell holds text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Blank => None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

fn looks_numeric(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    if digits.matches('.').count() > 1 || digits.starts_with('.') || digits.ends_with('.') {
        return false;
    }
    // "0", "0.5" are numbers; "002" is an identifier
    !(digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0."))
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

pub type Row = Vec<Cell>;

/// An ordered sequence of rows. Row 0 is the header row in every input this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rows(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a table from string literals, classifying each cell with [`Cell::parse`].
    #[must_use]
    pub fn from_strings(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|c| Cell::parse(c)).collect())
            .collect();
        Self::with_rows(name, rows)
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&BLANK)
    }

    #[must_use]
    pub fn text(&self, row: usize, col: usize) -> String {
        self.cell(row, col).as_text()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows after the header row, paired with their 0-based table index.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().enumerate().skip(1)
    }

    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Append a row of cells that are kept verbatim as text (blank for empty strings).
    pub fn push_text_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(
            cells
                .into_iter()
                .map(|s| {
                    let s = s.into();
                    if s.is_empty() {
                        Cell::Blank
                    } else {
                        Cell::Text(s)
                    }
                })
                .collect(),
        );
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
