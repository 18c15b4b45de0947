//! The three independent validators and the plumbing they share.
//!
//! Validators are pure functions of the tables they were loaded with. Per-file or
//! per-record problems surface as data in the result stream, never as `Err`.

mod missing;
mod naming;
mod observer;
mod title_block;

pub use missing::{
    ActualFileEntry, ExpectedFileEntry, MissingFileResult, MissingFilesSummary,
    MissingFilesValidator,
};
pub use naming::{
    AllowedToken, DEFAULT_MODEL_EXTENSIONS, FileKind, NamingErrorKind, NamingResult,
    NamingRuleTable, NamingSummary, NamingValidator, VALID_NAME_MESSAGE,
};
pub use observer::{NoopObserver, TracingObserver, ValidationObserver};
pub use title_block::{
    ColumnMapping, Mismatch, TitleBlockField, TitleBlockRecord, TitleBlockResult,
    TitleBlockStatus, TitleBlockSummary, TitleBlockValidator,
};

/// Round to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total` as a 0-100 percentage rounded to 2 decimals; 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
