use std::fmt::Write;

use crate::error::Result;
use crate::report::{CombinedSummary, Finding, collect_findings};

use super::{OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Whether to emit ANSI codes on stdout.
    pub(crate) fn enabled_on_stdout(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// Overall compliance at or above this is shown green, below it yellow.
const GOOD_COMPLIANCE: f64 = 90.0;
/// Below this the overall compliance is shown red.
const POOR_COMPLIANCE: f64 = 50.0;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.enabled_on_stdout(),
            verbose,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let label = self.paint(finding.check_type.as_str(), ansi::RED);
        let _ = writeln!(output, "✗ {label}: {}", finding.file_name);
        if finding.comment.is_empty() {
            let _ = writeln!(output, "   Status: {}", finding.status);
        } else {
            let _ = writeln!(output, "   {}: {}", finding.status, finding.comment);
        }
    }

    fn format_passed(&self, summary: &CombinedSummary, output: &mut String) {
        let passed = summary
            .naming
            .results
            .iter()
            .filter(|r| r.is_valid)
            .map(|r| ("Naming", r.file_name.as_str()))
            .chain(
                summary
                    .missing
                    .missing_files
                    .iter()
                    .filter(|r| r.found)
                    .map(|r| ("Register", r.expected_file.as_str())),
            )
            .chain(
                summary
                    .title_block
                    .results
                    .iter()
                    .filter(|r| r.mismatches.is_empty())
                    .map(|r| ("Title Block", r.register.display_name())),
            );

        for (check, name) in passed {
            let label = self.paint(check, ansi::GREEN);
            let _ = writeln!(output, "✓ {label}: {name}");
        }
    }

    fn format_totals(&self, summary: &CombinedSummary, output: &mut String) {
        let naming = &summary.naming;
        let missing = &summary.missing;
        let title_block = &summary.title_block;

        let _ = writeln!(
            output,
            "Naming:       {}/{} valid ({}%)",
            naming.valid, naming.total, naming.compliance
        );
        let _ = writeln!(
            output,
            "Register:     {}/{} found, {} missing, {} extra ({}% found)",
            missing.found_count,
            missing.total_expected,
            missing.missing_count,
            missing.extra_files.len(),
            missing.found_percentage()
        );
        let _ = writeln!(
            output,
            "Title blocks: {}/{} valid, {} mismatched, {} missing ({}%)",
            title_block.valid,
            title_block.total,
            title_block.mismatched,
            title_block.missing,
            title_block.compliance
        );

        let color = if summary.overall_compliance >= GOOD_COMPLIANCE {
            ansi::GREEN
        } else if summary.overall_compliance >= POOR_COMPLIANCE {
            ansi::YELLOW
        } else {
            ansi::RED
        };
        let overall = self.paint(&format!("{}%", summary.overall_compliance), color);
        let _ = writeln!(
            output,
            "Summary: {} files checked, overall compliance {overall}",
            summary.total_files
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &CombinedSummary) -> Result<String> {
        let mut output = String::new();

        let findings = collect_findings(summary);
        for finding in &findings {
            self.format_finding(finding, &mut output);
        }

        // Passing items only in verbose mode
        if self.verbose >= 1 {
            self.format_passed(summary, &mut output);
        }

        if !output.is_empty() {
            output.push('\n');
        }
        self.format_totals(summary, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
