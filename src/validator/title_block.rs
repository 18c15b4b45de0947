use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_cell_date, normalize_cell_text, normalize_for_comparison};
use crate::table::Table;

use super::observer::{NoopObserver, ValidationObserver};
use super::percentage;

/// Column index of each title-block field in a register or export table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub sheet_no: usize,
    pub sheet_name: usize,
    pub file_name: usize,
    pub rev_code: usize,
    pub rev_date: usize,
    pub suitability_code: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            sheet_no: 0,
            sheet_name: 1,
            file_name: 2,
            rev_code: 3,
            rev_date: 4,
            suitability_code: 5,
        }
    }
}

/// Title-block metadata for one drawing, every field normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TitleBlockRecord {
    pub sheet_no: String,
    pub sheet_name: String,
    pub file_name: String,
    pub rev_code: String,
    pub rev_date: String,
    pub suitability_code: String,
    /// 1-based row in the source table.
    pub source_row: usize,
}

impl TitleBlockRecord {
    /// Read row `row` of `table` through `mapping`. Text fields go through
    /// `normalize_text`, the revision date through `normalize_date`.
    #[must_use]
    pub fn from_row(table: &Table, row: usize, mapping: &ColumnMapping) -> Self {
        Self {
            sheet_no: normalize_cell_text(table.cell(row, mapping.sheet_no)),
            sheet_name: normalize_cell_text(table.cell(row, mapping.sheet_name)),
            file_name: normalize_cell_text(table.cell(row, mapping.file_name)),
            rev_code: normalize_cell_text(table.cell(row, mapping.rev_code)),
            rev_date: normalize_cell_date(table.cell(row, mapping.rev_date)),
            suitability_code: normalize_cell_text(table.cell(row, mapping.suitability_code)),
            source_row: row + 1,
        }
    }

    #[must_use]
    pub fn field(&self, field: TitleBlockField) -> &str {
        match field {
            TitleBlockField::SheetName => &self.sheet_name,
            TitleBlockField::FileName => &self.file_name,
            TitleBlockField::RevCode => &self.rev_code,
            TitleBlockField::RevDate => &self.rev_date,
            TitleBlockField::SuitabilityCode => &self.suitability_code,
        }
    }

    /// The label used in reports: the file name, else the sheet number.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.file_name.is_empty() {
            &self.sheet_no
        } else {
            &self.file_name
        }
    }

    const fn is_blank(&self) -> bool {
        self.sheet_no.is_empty() && self.file_name.is_empty()
    }
}

/// Fields compared once a register record has found its title block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBlockField {
    SheetName,
    FileName,
    RevCode,
    RevDate,
    SuitabilityCode,
}

impl TitleBlockField {
    pub const COMPARED: [Self; 5] = [
        Self::SheetName,
        Self::FileName,
        Self::RevCode,
        Self::RevDate,
        Self::SuitabilityCode,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SheetName => "sheetName",
            Self::FileName => "fileName",
            Self::RevCode => "revCode",
            Self::RevDate => "revDate",
            Self::SuitabilityCode => "suitabilityCode",
        }
    }
}

/// One field whose register value differs from the title block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn missing_title_block() -> Self {
        Self {
            field: "titleBlock".to_string(),
            expected: "Present".to_string(),
            actual: "Missing".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TitleBlockStatus {
    Valid,
    Mismatch,
    Missing,
}

impl TitleBlockStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Mismatch => "MISMATCH",
            Self::Missing => "MISSING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleBlockResult {
    pub register: TitleBlockRecord,
    pub matched: Option<TitleBlockRecord>,
    pub status: TitleBlockStatus,
    pub mismatches: Vec<Mismatch>,
}

impl TitleBlockResult {
    /// Mismatches flattened to `field: expected X, got Y; ...`.
    #[must_use]
    pub fn mismatch_summary(&self) -> String {
        self.mismatches
            .iter()
            .map(|m| format!("{}: expected {}, got {}", m.field, m.expected, m.actual))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleBlockSummary {
    pub total: usize,
    pub valid: usize,
    pub mismatched: usize,
    pub missing: usize,
    pub compliance: f64,
    pub results: Vec<TitleBlockResult>,
}

impl TitleBlockSummary {
    pub fn failing_results(&self) -> impl Iterator<Item = &TitleBlockResult> {
        self.results
            .iter()
            .filter(|r| r.status != TitleBlockStatus::Valid)
    }
}

/// Reconciles register metadata against the title-block export, field by field.
pub struct TitleBlockValidator {
    register: Vec<TitleBlockRecord>,
    title_blocks: Vec<TitleBlockRecord>,
    observer: Box<dyn ValidationObserver>,
}

impl Default for TitleBlockValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleBlockValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            register: Vec::new(),
            title_blocks: Vec::new(),
            observer: Box::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn load_register_data(&mut self, table: &Table, mapping: Option<&ColumnMapping>) {
        self.register = load_records(table, mapping);
    }

    pub fn load_title_block_data(&mut self, table: &Table, mapping: Option<&ColumnMapping>) {
        self.title_blocks = load_records(table, mapping);
    }

    #[must_use]
    pub fn register_records(&self) -> &[TitleBlockRecord] {
        &self.register
    }

    #[must_use]
    pub fn title_block_records(&self) -> &[TitleBlockRecord] {
        &self.title_blocks
    }

    #[must_use]
    pub fn validate(&self) -> TitleBlockSummary {
        let index = MatchIndex::build(&self.title_blocks);

        let results: Vec<TitleBlockResult> = self
            .register
            .iter()
            .map(|record| {
                let matched = index.find(record).map(|idx| &self.title_blocks[idx]);
                let result = compare(record, matched);
                self.observer.record_checked(&result);
                result
            })
            .collect();

        self.observer.finished("title-block", results.len());

        let total = results.len();
        let count = |status: TitleBlockStatus| {
            results.iter().filter(|r| r.status == status).count()
        };
        let valid = count(TitleBlockStatus::Valid);
        let mismatched = count(TitleBlockStatus::Mismatch);
        let missing = count(TitleBlockStatus::Missing);

        TitleBlockSummary {
            total,
            valid,
            mismatched,
            missing,
            compliance: percentage(valid, total),
            results,
        }
    }
}

fn load_records(table: &Table, mapping: Option<&ColumnMapping>) -> Vec<TitleBlockRecord> {
    let mapping = mapping.copied().unwrap_or_default();
    table
        .data_rows()
        .map(|(row, _)| TitleBlockRecord::from_row(table, row, &mapping))
        .filter(|record| !record.is_blank())
        .collect()
}

/// First title block per sheet number and per file-name key.
/// Empty keys are never indexed, so blank cells cannot match each other.
struct MatchIndex<'a> {
    by_sheet_no: HashMap<&'a str, usize>,
    by_file_name: HashMap<String, usize>,
}

impl<'a> MatchIndex<'a> {
    fn build(records: &'a [TitleBlockRecord]) -> Self {
        let mut by_sheet_no = HashMap::new();
        let mut by_file_name = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if !record.sheet_no.is_empty() {
                by_sheet_no.entry(record.sheet_no.as_str()).or_insert(idx);
            }
            let key = normalize_for_comparison(&record.file_name);
            if !key.is_empty() {
                by_file_name.entry(key).or_insert(idx);
            }
        }
        Self {
            by_sheet_no,
            by_file_name,
        }
    }

    fn find(&self, record: &TitleBlockRecord) -> Option<usize> {
        self.by_sheet_no
            .get(record.sheet_no.as_str())
            .or_else(|| {
                self.by_file_name
                    .get(&normalize_for_comparison(&record.file_name))
            })
            .copied()
    }
}

fn compare(register: &TitleBlockRecord, matched: Option<&TitleBlockRecord>) -> TitleBlockResult {
    let Some(title_block) = matched else {
        return TitleBlockResult {
            register: register.clone(),
            matched: None,
            status: TitleBlockStatus::Missing,
            mismatches: vec![Mismatch::missing_title_block()],
        };
    };

    let mismatches: Vec<Mismatch> = TitleBlockField::COMPARED
        .iter()
        .filter(|&&field| register.field(field) != title_block.field(field))
        .map(|&field| Mismatch {
            field: field.as_str().to_string(),
            expected: register.field(field).to_string(),
            actual: title_block.field(field).to_string(),
        })
        .collect();

    let status = if mismatches.is_empty() {
        TitleBlockStatus::Valid
    } else {
        TitleBlockStatus::Mismatch
    };

    TitleBlockResult {
        register: register.clone(),
        matched: Some(title_block.clone()),
        status,
        mismatches,
    }
}

#[cfg(test)]
#[path = "title_block_tests.rs"]
mod tests;
