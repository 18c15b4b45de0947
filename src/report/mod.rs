//! Combines the three validator summaries and flattens them into report tables.

mod export;
mod findings;
mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

pub use export::{REPORT_FILE_NAMES, read_report_tables, write_report_tables};
pub use findings::{CheckType, Finding, collect_findings};
pub use tables::{
    ReportTables, build_all_findings_table, build_missing_files_table,
    build_naming_errors_table, build_report_tables, build_summary_table,
    build_title_block_errors_table,
};

use serde::Serialize;

use crate::validator::{MissingFilesSummary, NamingSummary, TitleBlockSummary};

/// The outcome of a complete audit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedSummary {
    /// Mean of the three checks on the 0-100 "good" scale, rounded to an integer.
    pub overall_compliance: f64,
    /// Number of delivered files whose names were checked.
    pub total_files: usize,
    pub naming: NamingSummary,
    pub missing: MissingFilesSummary,
    pub title_block: TitleBlockSummary,
}

impl CombinedSummary {
    /// Number of failing items across all three checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.naming.invalid
            + self.missing.missing_count
            + self.missing.extra_files.len()
            + self.title_block.failing_results().count()
    }
}

/// Build the combined summary. Missing files enter the mean as `100 - missing_percentage`.
#[must_use]
pub fn aggregate(
    naming: NamingSummary,
    missing: MissingFilesSummary,
    title_block: TitleBlockSummary,
) -> CombinedSummary {
    let mean = (naming.compliance + missing.found_percentage() + title_block.compliance) / 3.0;
    CombinedSummary {
        overall_compliance: mean.round(),
        total_files: naming.total,
        naming,
        missing,
        title_block,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
