use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Table error: {0}")]
    Table(String),
}

impl AuditError {
    /// Short category label used by the CLI error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
            Self::Csv { .. } | Self::Table(_) => "Table",
        }
    }

    /// The error message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Table(msg) => msg.clone(),
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::InvalidPattern { pattern, source } => format!("'{pattern}': {source}"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::Csv { path, source } => format!("{}: {source}", path.display()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
