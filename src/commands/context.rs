//! Shared plumbing for the subcommands: configuration, input tables and output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{ColorChoice, SourceArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::error::{AuditError, Result};
use crate::output::{ColorMode, ProgressObserver};
use crate::scanner::{DeliveryScope, DirectoryScanner, FileScanner, load_file_list};
use crate::table::{CsvTableReader, Table, TableReader};
use crate::validator::{ActualFileEntry, TracingObserver, ValidationObserver};

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default search locations, or defaults.
///
/// `--no-config` skips the search but an explicit `--config` is still honored.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    let loader = FileConfigLoader::new();
    let loaded = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None if no_config => return Ok(Config::default()),
        None => loader.load()?,
    };
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "configuration loaded");
    }
    Ok(loaded.config)
}

/// Apply the source flags shared by `audit` and `naming` on top of the config.
pub(crate) fn apply_source_overrides(config: &mut Config, args: &SourceArgs) {
    if let Some(folder) = &args.folder {
        config.scanner.root = Some(folder.clone());
    }
    if let Some(sheets) = &args.sheet_rules {
        config.rules.sheets = Some(sheets.clone());
    }
    if let Some(models) = &args.model_rules {
        config.rules.models = Some(models.clone());
    }
    if let Some(model_ext) = &args.model_ext {
        config.rules.model_extensions.clone_from(model_ext);
    }
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

/// Validate the merged configuration before any input is read.
///
/// # Errors
/// Returns the first semantic problem found.
pub(crate) fn check_config(config: &Config) -> Result<()> {
    validate_config_semantics(config)
}

/// Return `path` or a configuration error naming the missing setting.
///
/// # Errors
/// Returns [`AuditError::Config`] when `path` is `None`.
pub(crate) fn require_path<'a>(
    path: Option<&'a Path>,
    what: &str,
    flag: &str,
) -> Result<&'a Path> {
    path.ok_or_else(|| {
        AuditError::Config(format!(
            "No {what} configured. Pass {flag} or set it in the config file."
        ))
    })
}

/// Reader for the input CSV files.
///
/// # Errors
/// Returns an error if the delimiter is not a single ASCII character.
pub(crate) fn table_reader(delimiter: char) -> Result<CsvTableReader> {
    let byte = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            AuditError::Config(format!(
                "CSV delimiter must be an ASCII character, got '{delimiter}'"
            ))
        })?;
    Ok(CsvTableReader::new().with_delimiter(byte))
}

/// Read one input table and log its size.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn read_table(reader: &dyn TableReader, path: &Path, what: &str) -> Result<Table> {
    let table = reader.read(path)?;
    tracing::info!(table = what, path = %path.display(), rows = table.len(), "table loaded");
    Ok(table)
}

/// The delivered files: from `--file-list` if given, otherwise by scanning `scanner.root`.
///
/// # Errors
/// Returns an error if the list cannot be read, the root is missing, or a glob is invalid.
pub(crate) fn collect_files(
    config: &Config,
    file_list: Option<&Path>,
) -> Result<Vec<ActualFileEntry>> {
    if let Some(list) = file_list {
        let files = load_file_list(list)?;
        tracing::info!(path = %list.display(), files = files.len(), "file list loaded");
        return Ok(files);
    }

    let root = config
        .scanner
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let scope = DeliveryScope::from_config(&config.scanner)?;
    let files = DirectoryScanner::new(scope).scan(&root)?;
    tracing::info!(root = %root.display(), files = files.len(), "delivery scanned");
    Ok(files)
}

/// Observers for one run: tracing events when verbose, a shared progress bar otherwise.
pub(crate) struct Observers {
    progress: ProgressObserver,
    verbose: bool,
}

impl Observers {
    #[must_use]
    pub(crate) fn new(verbose: u8, quiet: bool) -> Self {
        let verbose = verbose > 0;
        Self {
            progress: ProgressObserver::new(0, quiet || verbose),
            verbose,
        }
    }

    pub(crate) fn set_total(&self, total: usize) {
        self.progress.set_total(total as u64);
    }

    #[must_use]
    pub(crate) fn observer(&self) -> Box<dyn ValidationObserver> {
        if self.verbose {
            Box::new(TracingObserver)
        } else {
            Box::new(self.progress.clone())
        }
    }

    pub(crate) fn finish(&self) {
        self.progress.finish();
    }
}

/// Write to `output_path`, or print to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Exit code for a compliance figure checked against an optional `--fail-under` threshold.
#[must_use]
pub(crate) fn threshold_exit_code(compliance: f64, fail_under: Option<f64>) -> i32 {
    match fail_under {
        Some(threshold) if compliance < threshold => crate::EXIT_COMPLIANCE_BELOW_THRESHOLD,
        _ => crate::EXIT_SUCCESS,
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
