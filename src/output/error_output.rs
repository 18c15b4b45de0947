//! Colored error and warning messages on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::AuditError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Print an [`AuditError`] with its category and a hint where one applies.
    pub fn print_audit_error(&self, error: &AuditError) {
        let mut stderr = std::io::stderr().lock();
        self.write_audit_error(&mut stderr, error);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None);
    }

    pub fn write_audit_error<W: Write>(&self, w: &mut W, error: &AuditError) {
        let detail = std::error::Error::source(error).map(ToString::to_string);
        let detail = detail.filter(|d| !error.message().contains(d.as_str()));
        self.write_error(
            w,
            error.error_type(),
            &error.message(),
            detail.as_deref(),
            suggestion_for(error),
        );
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write errors are discarded: nowhere left to report them
        let heading = format!("✖ {error_type}:");
        let _ = writeln!(w, "{} {message}", self.paint(&heading, ansi::RED, true));
        self.write_tail(w, detail, suggestion);
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        let _ = writeln!(w, "{} {message}", self.paint("⚠ Warning:", ansi::YELLOW, true));
        self.write_tail(w, None, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {d}"), ansi::DIM, false));
        }
        if let Some(s) = suggestion {
            let _ = writeln!(w, "  {} {s}", self.paint("help:", ansi::CYAN, false));
        }
    }

    fn paint(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let weight = if bold { ansi::BOLD } else { "" };
        format!("{weight}{color}{text}{}", ansi::RESET)
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

fn suggestion_for(error: &AuditError) -> Option<&'static str> {
    match error {
        AuditError::Config(_) | AuditError::TomlParse(_) => {
            Some("Run 'drawing-audit config validate' to check the configuration file")
        }
        AuditError::FileRead { .. } => Some("Check that the path exists and is readable"),
        AuditError::InvalidPattern { .. } => Some("Check the glob syntax in scanner.exclude"),
        AuditError::Csv { .. } => Some("Export the sheet as UTF-8 CSV and try again"),
        AuditError::Io(_) | AuditError::JsonSerialize(_) | AuditError::Table(_) => None,
    }
}

/// Print an error on stderr using auto-detected color.
pub fn print_error(error: &AuditError) {
    ErrorOutput::stderr().print_audit_error(error);
}

/// Print a warning on stderr using auto-detected color.
pub fn print_warning(message: &str) {
    ErrorOutput::stderr().print_warning(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
