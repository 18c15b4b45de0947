use serde::Serialize;

use crate::normalize::strip_extension;
use crate::table::Table;

use super::observer::{NoopObserver, ValidationObserver};
use super::{ActualFileEntry, percentage};

/// Extensions that select the "model" rule table; anything else is a sheet.
pub const DEFAULT_MODEL_EXTENSIONS: [&str; 5] = ["rvt", "nwd", "nwf", "ifc", "nwc"];

/// Detail text for a file whose every part matched.
pub const VALID_NAME_MESSAGE: &str = "Delimiter correct. Number of parts correct.";

const NO_RULES_MESSAGE: &str = "No naming rules loaded";
const INVALID_DELIMITER_MESSAGE: &str = "Invalid delimiter in naming rules";

const DELIMITER_ROW: usize = 0;
const DELIMITER_COL: usize = 3;
const HEADER_ROW: usize = 1;
const FIRST_RULE_ROW: usize = 2;

/// Sentinel allow-list value that accepts any part.
const ANY_TOKEN: &str = "Var";
/// Suffix marking a prefix pattern, e.g. `PRE+N`.
const PREFIX_SUFFIX: &str = "+N";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Sheet,
    Model,
}

impl FileKind {
    /// Pick the rule table for a file from its extension (case-insensitive).
    ///
    /// A name without an extension is a sheet.
    #[must_use]
    pub fn from_file_name<S: AsRef<str>>(file_name: &str, model_extensions: &[S]) -> Self {
        let ext = file_name.rfind('.').map_or("", |idx| &file_name[idx + 1..]);
        if !ext.is_empty()
            && model_extensions
                .iter()
                .any(|m| m.as_ref().eq_ignore_ascii_case(ext))
        {
            Self::Model
        } else {
            Self::Sheet
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sheet => "sheet",
            Self::Model => "model",
        }
    }
}

/// One candidate value in a part's allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedToken {
    /// Exact string equality.
    Literal(String),
    /// `Var`: any value.
    Any,
    /// `<prefix>+N`: any value starting with the prefix.
    Prefix(String),
}

impl AllowedToken {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ANY_TOKEN {
            return Self::Any;
        }
        raw.strip_suffix(PREFIX_SUFFIX).map_or_else(
            || Self::Literal(raw.to_string()),
            |prefix| Self::Prefix(prefix.to_string()),
        )
    }

    #[must_use]
    pub fn matches(&self, part: &str) -> bool {
        match self {
            Self::Literal(value) => part == value,
            Self::Any => true,
            Self::Prefix(prefix) => part.starts_with(prefix.as_str()),
        }
    }
}

/// A naming rule table with its positional layout resolved into named fields.
///
/// Layout of the source table:
/// - row 0, column 3: delimiter
/// - row 1: header labels, one per part from column 1
/// - rows 2..: column `i + 1` holds one allowed value for part `i`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingRuleTable {
    pub delimiter: Option<String>,
    pub headers: Vec<String>,
    pub allowed: Vec<Vec<AllowedToken>>,
    pub row_count: usize,
}

impl NamingRuleTable {
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let delimiter = table
            .cell(DELIMITER_ROW, DELIMITER_COL)
            .as_str()
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let headers = table
            .rows
            .get(HEADER_ROW)
            .map(|row| {
                row.iter()
                    .skip(1)
                    .map(|c| c.as_text().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut allowed: Vec<Vec<AllowedToken>> = Vec::new();
        for row in table.rows.iter().skip(FIRST_RULE_ROW) {
            for (col, cell) in row.iter().enumerate().skip(1) {
                if cell.is_blank() {
                    continue;
                }
                let part = col - 1;
                if allowed.len() <= part {
                    allowed.resize_with(part + 1, Vec::new);
                }
                allowed[part].push(AllowedToken::parse(&cell.as_text()));
            }
        }

        Self {
            delimiter,
            headers,
            allowed,
            row_count: table.len(),
        }
    }

    #[must_use]
    pub fn candidates(&self, part_index: usize) -> &[AllowedToken] {
        self.allowed.get(part_index).map_or(&[], Vec::as_slice)
    }

    /// A part is valid when any candidate at its position matches.
    #[must_use]
    pub fn part_is_valid(&self, part_index: usize, value: &str) -> bool {
        self.candidates(part_index).iter().any(|t| t.matches(value))
    }

    /// Header labels joined by the delimiter, e.g. `Project-Originator-Number`.
    #[must_use]
    pub fn expected_pattern(&self) -> String {
        let Some(delimiter) = self.delimiter.as_deref() else {
            return String::new();
        };
        self.headers
            .iter()
            .filter(|h| !h.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

/// Error category reported for an invalid name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamingErrorKind {
    InvalidDelimiter,
    UnknownExtension,
    InvalidPart,
    InvalidPattern,
}

impl NamingErrorKind {
    /// Derive the category from the detail text, in priority order.
    ///
    /// The trigger substrings ("delimiter", "file type", "Part") are part of the
    /// report format consumers rely on; keep them in sync with the detail messages.
    #[must_use]
    pub fn classify(details: &str, is_valid: bool) -> Option<Self> {
        if is_valid {
            return None;
        }
        let kind = if details.contains("delimiter") {
            Self::InvalidDelimiter
        } else if details.contains("file type") {
            Self::UnknownExtension
        } else if details.contains("Part") {
            Self::InvalidPart
        } else {
            Self::InvalidPattern
        };
        Some(kind)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDelimiter => "INVALID_DELIMITER",
            Self::UnknownExtension => "UNKNOWN_EXTENSION",
            Self::InvalidPart => "INVALID_PART",
            Self::InvalidPattern => "INVALID_PATTERN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingResult {
    pub file_name: String,
    pub folder_path: String,
    pub file_kind: FileKind,
    pub is_valid: bool,
    pub error_kind: Option<NamingErrorKind>,
    pub details: String,
    pub expected_pattern: String,
}

impl NamingResult {
    /// Report wording for the compliance column.
    #[must_use]
    pub const fn compliance_label(&self) -> &'static str {
        if self.is_valid { "Correct" } else { "Wrong" }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamingSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub compliance: f64,
    pub results: Vec<NamingResult>,
}

impl NamingSummary {
    #[must_use]
    pub fn from_results(results: Vec<NamingResult>) -> Self {
        let total = results.len();
        let valid = results.iter().filter(|r| r.is_valid).count();
        Self {
            total,
            valid,
            invalid: total - valid,
            compliance: percentage(valid, total),
            results,
        }
    }

    pub fn invalid_results(&self) -> impl Iterator<Item = &NamingResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }
}

#[derive(Debug, Clone, Default)]
struct LoadedRules {
    sheets: NamingRuleTable,
    models: NamingRuleTable,
}

impl LoadedRules {
    const fn for_kind(&self, kind: FileKind) -> &NamingRuleTable {
        match kind {
            FileKind::Sheet => &self.sheets,
            FileKind::Model => &self.models,
        }
    }
}

struct Evaluation {
    is_valid: bool,
    details: String,
    expected_pattern: String,
}

impl Evaluation {
    fn config_failure(details: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            details: details.into(),
            expected_pattern: String::new(),
        }
    }
}

/// Validates file names against the positional, delimiter-split naming grammar.
pub struct NamingValidator {
    rules: Option<LoadedRules>,
    model_extensions: Vec<String>,
    observer: Box<dyn ValidationObserver>,
}

impl Default for NamingValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: None,
            model_extensions: DEFAULT_MODEL_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            observer: Box::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_model_extensions(mut self, extensions: Vec<String>) -> Self {
        self.model_extensions = extensions;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn load_rules(&mut self, sheets: &Table, models: &Table) {
        let rules = LoadedRules {
            sheets: NamingRuleTable::from_table(sheets),
            models: NamingRuleTable::from_table(models),
        };
        self.observer.rules_loaded(FileKind::Sheet, rules.sheets.row_count);
        self.observer.rules_loaded(FileKind::Model, rules.models.row_count);
        self.rules = Some(rules);
    }

    #[must_use]
    pub const fn has_rules(&self) -> bool {
        self.rules.is_some()
    }

    #[must_use]
    pub fn validate_file_name(&self, file_name: &str, folder_path: &str) -> NamingResult {
        let file_kind = FileKind::from_file_name(file_name, &self.model_extensions);
        let evaluation = self.evaluate(file_name, file_kind);

        let result = NamingResult {
            file_name: file_name.to_string(),
            folder_path: folder_path.to_string(),
            file_kind,
            is_valid: evaluation.is_valid,
            error_kind: NamingErrorKind::classify(&evaluation.details, evaluation.is_valid),
            details: evaluation.details,
            expected_pattern: evaluation.expected_pattern,
        };
        self.observer.file_checked(&result);
        result
    }

    #[must_use]
    pub fn validate_files(&self, files: &[ActualFileEntry]) -> NamingSummary {
        let results = files
            .iter()
            .map(|f| self.validate_file_name(&f.name, &f.folder_path()))
            .collect::<Vec<_>>();
        self.observer.finished("naming", results.len());
        NamingSummary::from_results(results)
    }

    fn evaluate(&self, file_name: &str, file_kind: FileKind) -> Evaluation {
        let Some(rules) = &self.rules else {
            return Evaluation::config_failure(NO_RULES_MESSAGE);
        };

        let table = rules.for_kind(file_kind);
        if table.row_count == 0 {
            return Evaluation::config_failure(format!(
                "No data for file type: {}",
                file_kind.as_str()
            ));
        }

        let Some(delimiter) = table.delimiter.as_deref() else {
            return Evaluation::config_failure(INVALID_DELIMITER_MESSAGE);
        };

        let stem = strip_extension(file_name);
        let mut problems = Vec::new();
        for (index, part) in stem.split(delimiter).enumerate() {
            let valid = table.part_is_valid(index, part);
            self.observer.part_checked(file_name, index, part, valid);
            if !valid {
                problems.push(format!("Part {} ({part}) is not valid", index + 1));
            }
        }

        let is_valid = problems.is_empty();
        let details = if is_valid {
            VALID_NAME_MESSAGE.to_string()
        } else {
            problems.join("; ")
        };

        Evaluation {
            is_valid,
            details,
            expected_pattern: table.expected_pattern(),
        }
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
