use super::{FileKind, MissingFileResult, NamingResult, TitleBlockResult};

/// Hooks for watching a validation run without touching its results.
///
/// Every method defaults to a no-op. Validators call them in input order.
pub trait ValidationObserver {
    fn rules_loaded(&self, _kind: FileKind, _rule_rows: usize) {}

    fn part_checked(&self, _file_name: &str, _index: usize, _value: &str, _valid: bool) {}

    fn file_checked(&self, _result: &NamingResult) {}

    fn expected_file_checked(&self, _result: &MissingFileResult) {}

    fn record_checked(&self, _result: &TitleBlockResult) {}

    fn finished(&self, _validator: &'static str, _total: usize) {}
}

/// Observer that ignores everything. Default for every validator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {}

/// Emits `tracing` events at debug/trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn rules_loaded(&self, kind: FileKind, rule_rows: usize) {
        tracing::debug!(kind = kind.as_str(), rule_rows, "naming rules loaded");
    }

    fn part_checked(&self, file_name: &str, index: usize, value: &str, valid: bool) {
        tracing::trace!(file = file_name, part = index + 1, value, valid, "name part checked");
    }

    fn file_checked(&self, result: &NamingResult) {
        tracing::debug!(
            file = %result.file_name,
            valid = result.is_valid,
            details = %result.details,
            "file name validated"
        );
    }

    fn expected_file_checked(&self, result: &MissingFileResult) {
        tracing::debug!(
            expected = %result.expected_file,
            found = result.found,
            register_row = result.register_row,
            "register entry reconciled"
        );
    }

    fn record_checked(&self, result: &TitleBlockResult) {
        tracing::debug!(
            sheet_no = %result.register.sheet_no,
            file = %result.register.file_name,
            status = result.status.as_str(),
            mismatches = result.mismatches.len(),
            "title block compared"
        );
    }

    fn finished(&self, validator: &'static str, total: usize) {
        tracing::debug!(validator, total, "validation finished");
    }
}
