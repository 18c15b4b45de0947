use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, NamingArgs};
use crate::error::Result;
use crate::output::{ErrorOutput, NamingFormatter};
use crate::validator::{ActualFileEntry, NamingSummary, NamingValidator};

use super::audit::resolve_format;
use super::context::{
    Observers, apply_source_overrides, check_config, collect_files, color_choice_to_mode,
    load_config, read_table, require_path, table_reader, threshold_exit_code, write_output,
};

#[must_use]
pub fn run_naming(args: &NamingArgs, cli: &Cli) -> i32 {
    match run_naming_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_audit_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks file names against the naming rules only.
///
/// Names given with `--name` are checked as-is; otherwise the delivery is collected
/// the same way `audit` does it.
///
/// # Errors
/// Returns an error if no sheet rules are configured or an input cannot be read.
pub(crate) fn run_naming_impl(args: &NamingArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.source.config.as_deref(), cli.no_config)?;
    apply_source_overrides(&mut config, &args.source);
    check_config(&config)?;
    let format = resolve_format(args.format, &config)?;

    let reader = table_reader(args.source.csv_delimiter)?;
    let sheets_path = require_path(
        config.rules.sheets.as_deref(),
        "sheet naming rules",
        "--sheet-rules",
    )?;
    let sheet_rules = read_table(&reader, sheets_path, "sheet rules")?;
    let model_rules = match config.model_rules() {
        Some(path) if path != sheets_path => read_table(&reader, path, "model rules")?,
        _ => sheet_rules.clone(),
    };

    let files = if args.names.is_empty() {
        collect_files(&config, args.source.file_list.as_deref())?
    } else {
        args.names
            .iter()
            .map(|name| ActualFileEntry::new(name.as_str(), name.as_str()))
            .collect()
    };

    let observers = Observers::new(cli.verbose, cli.quiet);
    observers.set_total(files.len());
    let mut validator = NamingValidator::new()
        .with_model_extensions(config.rules.model_extensions.clone())
        .with_observer(observers.observer());
    validator.load_rules(&sheet_rules, &model_rules);
    let summary: NamingSummary = validator.validate_files(&files);
    observers.finish();

    let formatter = NamingFormatter::new(format, color_choice_to_mode(cli.color), cli.verbose);
    write_output(args.output.as_deref(), &formatter.format(&summary)?, cli.quiet)?;

    Ok(threshold_exit_code(summary.compliance, args.fail_under))
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
