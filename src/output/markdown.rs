use std::fmt::Write;

use crate::error::Result;
use crate::report::{CombinedSummary, collect_findings};
use crate::validator::TitleBlockStatus;

use super::OutputFormatter;

pub struct MarkdownFormatter {
    show_passed: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { show_passed: false }
    }

    /// Also list every file that passed all checks.
    #[must_use]
    pub const fn with_passed(mut self, show: bool) -> Self {
        self.show_passed = show;
        self
    }

    fn write_summary(summary: &CombinedSummary, output: &mut String) {
        let naming = &summary.naming;
        let missing = &summary.missing;
        let title_block = &summary.title_block;

        writeln!(output, "## Drawing Audit Results\n").ok();
        writeln!(output, "| Check | Checked | Passed | Failed | Compliance |").ok();
        writeln!(output, "|-------|--------:|-------:|-------:|-----------:|").ok();
        writeln!(
            output,
            "| Naming | {} | {} | {} | {}% |",
            naming.total, naming.valid, naming.invalid, naming.compliance
        )
        .ok();
        writeln!(
            output,
            "| Register | {} | {} | {} | {}% |",
            missing.total_expected,
            missing.found_count,
            missing.missing_count,
            missing.found_percentage()
        )
        .ok();
        writeln!(
            output,
            "| Title Block | {} | {} | {} | {}% |",
            title_block.total,
            title_block.valid,
            title_block.mismatched + title_block.missing,
            title_block.compliance
        )
        .ok();
        writeln!(output).ok();
        writeln!(
            output,
            "**Overall compliance: {}%** across {} files",
            summary.overall_compliance, summary.total_files
        )
        .ok();
        writeln!(output).ok();
    }

    fn write_findings(summary: &CombinedSummary, output: &mut String) {
        let findings = collect_findings(summary);
        if findings.is_empty() {
            return;
        }

        writeln!(output, "### Findings\n").ok();
        writeln!(output, "| Check | File | Status | Comment |").ok();
        writeln!(output, "|-------|------|--------|---------|").ok();
        for finding in &findings {
            let comment = if finding.comment.is_empty() {
                "-".to_string()
            } else {
                escape_cell(&finding.comment)
            };
            writeln!(
                output,
                "| ❌ {} | `{}` | {} | {comment} |",
                finding.check_type.as_str(),
                finding.file_name,
                finding.status
            )
            .ok();
        }
        writeln!(output).ok();
    }

    fn write_passed(summary: &CombinedSummary, output: &mut String) {
        writeln!(output, "### Passed\n").ok();
        writeln!(output, "| Check | File |").ok();
        writeln!(output, "|-------|------|").ok();
        for result in summary.naming.results.iter().filter(|r| r.is_valid) {
            writeln!(output, "| ✅ Naming | `{}` |", result.file_name).ok();
        }
        for result in summary.missing.missing_files.iter().filter(|r| r.found) {
            writeln!(output, "| ✅ Register | `{}` |", result.expected_file).ok();
        }
        for result in &summary.title_block.results {
            if result.status == TitleBlockStatus::Valid {
                writeln!(output, "| ✅ Title Block | `{}` |", result.register.display_name()).ok();
            }
        }
        writeln!(output).ok();
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, summary: &CombinedSummary) -> Result<String> {
        let mut output = String::new();

        Self::write_summary(summary, &mut output);
        Self::write_findings(summary, &mut output);
        if self.show_passed {
            Self::write_passed(summary, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
