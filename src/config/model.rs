use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::validator::{ColumnMapping, DEFAULT_MODEL_EXTENSIONS};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = ".drawing-audit.toml";

/// Naming-convention rule tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Rule table applied to sheet files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<PathBuf>,

    /// Rule table applied to model files. Falls back to `sheets` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<PathBuf>,

    /// Extensions (without the dot) that make a file a model.
    #[serde(default = "default_model_extensions")]
    pub model_extensions: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            sheets: None,
            models: None,
            model_extensions: default_model_extensions(),
        }
    }
}

fn default_model_extensions() -> Vec<String> {
    DEFAULT_MODEL_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// The drawing register: the list of files expected in the delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// 0-based column holding the expected file name.
    #[serde(default)]
    pub file_column: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleBlockConfig {
    /// Register metadata table. Defaults to `register.path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register: Option<PathBuf>,

    /// Title-block export table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<PathBuf>,

    #[serde(default)]
    pub register_columns: ColumnMapping,

    #[serde(default)]
    pub export_columns: ColumnMapping,
}

/// Where the delivered files are found when no file list is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Extension allow-list; empty admits every file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns relative to `root`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// `text`, `json` or `markdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Directory for the CSV report tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub register: RegisterConfig,

    #[serde(default)]
    pub title_block: TitleBlockConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Make every relative path absolute against `base`, the config file's directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        let paths = [
            &mut self.rules.sheets,
            &mut self.rules.models,
            &mut self.register.path,
            &mut self.title_block.register,
            &mut self.title_block.export,
            &mut self.scanner.root,
            &mut self.output.report_dir,
        ];
        for path in paths.into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// The register table used for title-block comparison.
    #[must_use]
    pub fn title_block_register(&self) -> Option<&Path> {
        self.title_block
            .register
            .as_deref()
            .or(self.register.path.as_deref())
    }

    /// The model rule table, falling back to the sheet rules.
    #[must_use]
    pub fn model_rules(&self) -> Option<&Path> {
        self.rules.models.as_deref().or(self.rules.sheets.as_deref())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
