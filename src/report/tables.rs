use serde::Serialize;

use crate::table::{Cell, Table};

use super::{CombinedSummary, collect_findings};

pub const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];
pub const MISSING_FILES_HEADER: [&str; 4] = ["Expected File", "Register Row", "Status", "Actual Path"];
pub const EXTRA_FILES_HEADER: [&str; 3] = ["Extra File", "Path", "Extension"];
pub const NAMING_ERRORS_HEADER: [&str; 6] = [
    "File Name",
    "Folder",
    "Compliance",
    "Error Type",
    "Details",
    "Expected Pattern",
];
pub const TITLE_BLOCK_ERRORS_HEADER: [&str; 5] =
    ["Sheet No", "Sheet Name", "File Name", "Status", "Mismatches"];
pub const ALL_FINDINGS_HEADER: [&str; 4] = ["Check Type", "File Name", "Status", "Comment"];

/// Row-oriented views of a [`CombinedSummary`]. Row 0 of every table is its header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTables {
    pub summary: Table,
    pub missing_files: Table,
    pub naming_errors: Table,
    pub title_block_errors: Table,
    pub all_findings: Table,
}

impl ReportTables {
    /// The five tables in export order.
    #[must_use]
    pub fn tables(&self) -> [&Table; 5] {
        [
            &self.summary,
            &self.missing_files,
            &self.naming_errors,
            &self.title_block_errors,
            &self.all_findings,
        ]
    }
}

#[must_use]
pub fn build_report_tables(summary: &CombinedSummary) -> ReportTables {
    ReportTables {
        summary: build_summary_table(summary),
        missing_files: build_missing_files_table(summary),
        naming_errors: build_naming_errors_table(summary),
        title_block_errors: build_title_block_errors_table(summary),
        all_findings: build_all_findings_table(summary),
    }
}

#[must_use]
pub fn build_summary_table(summary: &CombinedSummary) -> Table {
    let naming = &summary.naming;
    let missing = &summary.missing;
    let title_block = &summary.title_block;

    let metrics: [(&str, Cell); 16] = [
        ("Overall Compliance (%)", summary.overall_compliance.into()),
        ("Total Files", summary.total_files.into()),
        ("Naming: Files Checked", naming.total.into()),
        ("Naming: Valid", naming.valid.into()),
        ("Naming: Invalid", naming.invalid.into()),
        ("Naming: Compliance (%)", naming.compliance.into()),
        ("Register: Expected Files", missing.total_expected.into()),
        ("Register: Found", missing.found_count.into()),
        ("Register: Missing", missing.missing_count.into()),
        ("Register: Missing (%)", missing.missing_percentage.into()),
        ("Register: Extra Files", missing.extra_files.len().into()),
        ("Title Block: Records", title_block.total.into()),
        ("Title Block: Valid", title_block.valid.into()),
        ("Title Block: Mismatched", title_block.mismatched.into()),
        ("Title Block: Missing", title_block.missing.into()),
        ("Title Block: Compliance (%)", title_block.compliance.into()),
    ];

    let mut table = Table::new("summary");
    table.push_text_row(SUMMARY_HEADER);
    for (metric, value) in metrics {
        table.push_row([Cell::from(metric), value]);
    }
    table
}

/// Every register entry with its status, then a blank separator row and the extra files.
#[must_use]
pub fn build_missing_files_table(summary: &CombinedSummary) -> Table {
    let mut table = Table::new("missing_files");
    table.push_text_row(MISSING_FILES_HEADER);
    for result in &summary.missing.missing_files {
        table.push_row([
            Cell::from(result.expected_file.as_str()),
            Cell::from(result.register_row),
            Cell::from(if result.found { "Found" } else { "Missing" }),
            result
                .actual_path
                .as_deref()
                .map_or(Cell::Blank, Cell::from),
        ]);
    }

    if !summary.missing.extra_files.is_empty() {
        table.push_row(Vec::<Cell>::new());
        table.push_text_row(EXTRA_FILES_HEADER);
        for file in &summary.missing.extra_files {
            table.push_text_row([
                file.name.as_str(),
                file.path.as_str(),
                file.extension.as_str(),
            ]);
        }
    }
    table
}

#[must_use]
pub fn build_naming_errors_table(summary: &CombinedSummary) -> Table {
    let mut table = Table::new("naming_errors");
    table.push_text_row(NAMING_ERRORS_HEADER);
    for result in summary.naming.invalid_results() {
        table.push_text_row([
            result.file_name.as_str(),
            result.folder_path.as_str(),
            result.compliance_label(),
            result.error_kind.map_or("", |k| k.as_str()),
            result.details.as_str(),
            result.expected_pattern.as_str(),
        ]);
    }
    table
}

#[must_use]
pub fn build_title_block_errors_table(summary: &CombinedSummary) -> Table {
    let mut table = Table::new("title_block_errors");
    table.push_text_row(TITLE_BLOCK_ERRORS_HEADER);
    for result in summary.title_block.failing_results() {
        let record = &result.register;
        table.push_text_row([
            record.sheet_no.clone(),
            record.sheet_name.clone(),
            record.file_name.clone(),
            result.status.as_str().to_string(),
            result.mismatch_summary(),
        ]);
    }
    table
}

#[must_use]
pub fn build_all_findings_table(summary: &CombinedSummary) -> Table {
    let mut table = Table::new("all_findings");
    table.push_text_row(ALL_FINDINGS_HEADER);
    for finding in collect_findings(summary) {
        table.push_text_row([
            finding.check_type.as_str().to_string(),
            finding.file_name,
            finding.status,
            finding.comment,
        ]);
    }
    table
}
