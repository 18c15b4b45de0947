//! Rendering an audit outcome for humans and machines.

mod error_output;
mod json;
mod markdown;
mod naming;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use naming::NamingFormatter;
pub use progress::ProgressObserver;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::CombinedSummary;

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for formatting an audit summary into various output formats.
pub trait OutputFormatter {
    /// Format the combined summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &CombinedSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Build the formatter for `format`. Color and verbosity only affect text output.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode, verbose: u8) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new().with_passed(verbose > 0)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
