use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config, validate_config_semantics};
use crate::output::ErrorOutput;
use crate::validator::ColumnMapping;
use crate::{AuditError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
    match &args.action {
        ConfigAction::Validate { config } => match run_config_validate_impl(config) {
            Ok(()) => {
                println!("Configuration is valid: {}", config.display());
                EXIT_SUCCESS
            }
            Err(e) => {
                errors.print_audit_error(&e);
                EXIT_CONFIG_ERROR
            }
        },
        ConfigAction::Show { config, format } => {
            match run_config_show_impl(config.as_deref(), format, cli.no_config) {
                Ok(output) => {
                    print!("{output}");
                    EXIT_SUCCESS
                }
                Err(e) => {
                    errors.print_audit_error(&e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(AuditError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config = parse_config(&content)?;
    validate_config_semantics(&config)
}

/// Renders the effective configuration as text, JSON or TOML.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, or the format is unknown.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: &str,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(&config)?)),
        "toml" => toml::to_string_pretty(&config)
            .map_err(|e| AuditError::Config(format!("Cannot render configuration: {e}"))),
        "text" => Ok(format_config_text(&config)),
        other => Err(AuditError::Config(format!(
            "Unknown config format: {other}. Expected text, json or toml"
        ))),
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
}

fn write_columns(output: &mut String, label: &str, columns: &ColumnMapping) {
    let _ = writeln!(
        output,
        "  {label} = sheet_no:{} sheet_name:{} file_name:{} rev_code:{} rev_date:{} suitability_code:{}",
        columns.sheet_no,
        columns.sheet_name,
        columns.file_name,
        columns.rev_code,
        columns.rev_date,
        columns.suitability_code
    );
}

pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::from("=== Effective Configuration ===\n\n");

    output.push_str("[rules]\n");
    let _ = writeln!(output, "  sheets = {}", display_path(config.rules.sheets.as_deref()));
    let _ = writeln!(output, "  models = {}", display_path(config.model_rules()));
    let _ = writeln!(output, "  model_extensions = {:?}", config.rules.model_extensions);

    output.push_str("\n[register]\n");
    let _ = writeln!(output, "  path = {}", display_path(config.register.path.as_deref()));
    let _ = writeln!(output, "  file_column = {}", config.register.file_column);

    output.push_str("\n[title_block]\n");
    let _ = writeln!(output, "  register = {}", display_path(config.title_block_register()));
    let _ = writeln!(output, "  export = {}", display_path(config.title_block.export.as_deref()));
    write_columns(&mut output, "register_columns", &config.title_block.register_columns);
    write_columns(&mut output, "export_columns", &config.title_block.export_columns);

    output.push_str("\n[scanner]\n");
    let _ = writeln!(output, "  root = {}", display_path(config.scanner.root.as_deref()));
    if !config.scanner.extensions.is_empty() {
        let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    }
    if !config.scanner.exclude.is_empty() {
        output.push_str("  exclude = [\n");
        for pattern in &config.scanner.exclude {
            let _ = writeln!(output, "    \"{pattern}\",");
        }
        output.push_str("  ]\n");
    }

    output.push_str("\n[output]\n");
    let _ = writeln!(
        output,
        "  format = {}",
        config.output.format.as_deref().unwrap_or("text")
    );
    let _ = writeln!(
        output,
        "  report_dir = {}",
        display_path(config.output.report_dir.as_deref())
    );

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
