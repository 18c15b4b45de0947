use std::path::Path;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{AuditArgs, Cli};
use crate::config::Config;
use crate::error::Result;
use crate::output::{ErrorOutput, OutputFormat, formatter_for};
use crate::report::{CombinedSummary, aggregate, build_report_tables, write_report_tables};
use crate::table::{CsvTableWriter, Table, TableReader};
use crate::validator::{
    ActualFileEntry, MissingFilesValidator, NamingValidator, TitleBlockValidator,
};

use super::context::{
    Observers, apply_source_overrides, check_config, collect_files, color_choice_to_mode,
    load_config, read_table, require_path, table_reader, threshold_exit_code, write_output,
};

#[must_use]
pub fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_audit_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a full audit and returns the exit code.
///
/// # Errors
/// Returns an error if the configuration is incomplete or an input cannot be read.
pub(crate) fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    // 1. Configuration: file, then CLI overrides
    let mut config = load_config(args.source.config.as_deref(), cli.no_config)?;
    apply_audit_overrides(&mut config, args);
    check_config(&config)?;
    let format = resolve_format(args.format, &config)?;

    // 2. Inputs
    let reader = table_reader(args.source.csv_delimiter)?;
    let inputs = AuditInputs::load(&config, &reader, args.source.file_list.as_deref())?;

    // 3. Validate and aggregate
    let observers = Observers::new(cli.verbose, cli.quiet);
    observers.set_total(inputs.check_count());
    let summary = run_checks(&config, &inputs, &observers);
    observers.finish();

    // 4. Output
    let formatter = formatter_for(format, color_choice_to_mode(cli.color), cli.verbose);
    write_output(args.output.as_deref(), &formatter.format(&summary)?, cli.quiet)?;

    if let Some(dir) = &config.output.report_dir {
        let tables = build_report_tables(&summary);
        let written = write_report_tables(&tables, dir, &CsvTableWriter::new())?;
        tracing::info!(dir = %dir.display(), files = written.len(), "report tables written");
        if !cli.quiet {
            eprintln!("Report tables written to {}", dir.display());
        }
    }

    Ok(threshold_exit_code(summary.overall_compliance, args.fail_under))
}

fn apply_audit_overrides(config: &mut Config, args: &AuditArgs) {
    apply_source_overrides(config, &args.source);
    if let Some(register) = &args.register {
        config.register.path = Some(register.clone());
    }
    if let Some(column) = args.register_column {
        config.register.file_column = column;
    }
    if let Some(export) = &args.title_blocks {
        config.title_block.export = Some(export.clone());
    }
    if let Some(register) = &args.title_block_register {
        config.title_block.register = Some(register.clone());
    }
    if let Some(dir) = &args.report_dir {
        config.output.report_dir = Some(dir.clone());
    }
}

/// CLI flag first, then `output.format`, then text.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    config
        .output
        .format
        .as_deref()
        .map_or(Ok(OutputFormat::Text), |f| {
            f.parse().map_err(crate::AuditError::Config)
        })
}

/// Every table and file an audit reads.
pub(crate) struct AuditInputs {
    pub sheet_rules: Table,
    pub model_rules: Table,
    pub register: Table,
    pub title_block_register: Table,
    pub title_blocks: Table,
    pub files: Vec<ActualFileEntry>,
}

impl AuditInputs {
    /// Read the inputs named by `config`. A table shared by two roles is read once.
    pub(crate) fn load(
        config: &Config,
        reader: &dyn TableReader,
        file_list: Option<&Path>,
    ) -> Result<Self> {
        let register_path = require_path(
            config.register.path.as_deref(),
            "drawing register",
            "--register",
        )?;
        let sheets_path = require_path(
            config.rules.sheets.as_deref(),
            "sheet naming rules",
            "--sheet-rules",
        )?;
        let export_path = require_path(
            config.title_block.export.as_deref(),
            "title-block export",
            "--title-blocks",
        )?;

        let register = read_table(reader, register_path, "register")?;
        let title_block_register = match config.title_block_register() {
            Some(path) if path != register_path => {
                read_table(reader, path, "title-block register")?
            }
            _ => register.clone(),
        };

        let sheet_rules = read_table(reader, sheets_path, "sheet rules")?;
        let model_rules = match config.model_rules() {
            Some(path) if path != sheets_path => read_table(reader, path, "model rules")?,
            _ => sheet_rules.clone(),
        };

        Ok(Self {
            sheet_rules,
            model_rules,
            register,
            title_block_register,
            title_blocks: read_table(reader, export_path, "title-block export")?,
            files: collect_files(config, file_list)?,
        })
    }

    /// Number of observer ticks one audit produces.
    fn check_count(&self) -> usize {
        self.files.len()
            + self.register.len().saturating_sub(1)
            + self.title_block_register.len().saturating_sub(1)
    }
}

/// Run the three validators over loaded inputs and combine their summaries.
pub(crate) fn run_checks(
    config: &Config,
    inputs: &AuditInputs,
    observers: &Observers,
) -> CombinedSummary {
    let mut naming = NamingValidator::new()
        .with_model_extensions(config.rules.model_extensions.clone())
        .with_observer(observers.observer());
    naming.load_rules(&inputs.sheet_rules, &inputs.model_rules);
    let naming_summary = naming.validate_files(&inputs.files);

    let mut missing = MissingFilesValidator::new().with_observer(observers.observer());
    missing.load_expected_files(&inputs.register, config.register.file_column);
    missing.load_actual_files(inputs.files.clone());
    let missing_summary = missing.validate();

    let mut title_block = TitleBlockValidator::new().with_observer(observers.observer());
    title_block.load_register_data(
        &inputs.title_block_register,
        Some(&config.title_block.register_columns),
    );
    title_block.load_title_block_data(
        &inputs.title_blocks,
        Some(&config.title_block.export_columns),
    );
    let title_block_summary = title_block.validate();

    aggregate(naming_summary, missing_summary, title_block_summary)
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
