use std::fmt::Write;

use crate::error::Result;
use crate::validator::NamingSummary;

use super::{ColorMode, OutputFormat, ansi};

/// Renders the result of a naming-only check.
pub struct NamingFormatter {
    format: OutputFormat,
    use_colors: bool,
    verbose: u8,
}

impl NamingFormatter {
    #[must_use]
    pub fn new(format: OutputFormat, mode: ColorMode, verbose: u8) -> Self {
        Self {
            format,
            use_colors: format == OutputFormat::Text && mode.enabled_on_stdout(),
            verbose,
        }
    }

    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, summary: &NamingSummary) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(summary)),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summary)?)),
            OutputFormat::Markdown => Ok(self.format_markdown(summary)),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_text(&self, summary: &NamingSummary) -> String {
        let mut output = String::new();
        for result in &summary.results {
            if result.is_valid {
                if self.verbose > 0 {
                    let _ = writeln!(output, "{} {}", self.paint("✓", ansi::GREEN), result.file_name);
                }
                continue;
            }
            let kind = result.error_kind.map_or("INVALID", |k| k.as_str());
            let _ = writeln!(output, "{} {}", self.paint("✗", ansi::RED), result.file_name);
            let _ = writeln!(output, "   {kind}: {}", result.details);
            if !result.expected_pattern.is_empty() {
                let _ = writeln!(output, "   Expected: {}", result.expected_pattern);
            }
        }
        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "Naming: {}/{} valid ({}%)",
            summary.valid, summary.total, summary.compliance
        );
        output
    }

    fn format_markdown(&self, summary: &NamingSummary) -> String {
        let mut output = String::from("## Naming Check\n\n");
        let _ = writeln!(
            output,
            "**{}/{} valid ({}%)**\n",
            summary.valid, summary.total, summary.compliance
        );
        let rows: Vec<_> = summary
            .results
            .iter()
            .filter(|r| !r.is_valid || self.verbose > 0)
            .collect();
        if rows.is_empty() {
            return output;
        }
        output.push_str("| File | Status | Details |\n|------|--------|---------|\n");
        for result in rows {
            let status = result.error_kind.map_or("✅ VALID", |k| k.as_str());
            let _ = writeln!(
                output,
                "| `{}` | {status} | {} |",
                result.file_name,
                result.details.replace('|', "\\|")
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
