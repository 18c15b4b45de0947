//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot drive an audit.

use crate::config::{CONFIG_VERSION, Config};
use crate::output::OutputFormat;
use crate::{AuditError, Result};

/// Reject any version other than the supported one. A missing version is accepted.
pub(super) fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(AuditError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, a glob pattern is invalid,
/// the model extension list is empty, or the output format is unknown.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_config_version(config)?;
    validate_glob_patterns(config)?;
    validate_rules_section(config)?;
    validate_output_section(config)?;
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| AuditError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_rules_section(config: &Config) -> Result<()> {
    let extensions = &config.rules.model_extensions;
    if extensions.is_empty() {
        return Err(AuditError::Config(
            "rules.model_extensions must not be empty".to_string(),
        ));
    }
    if let Some(ext) = extensions.iter().find(|e| e.trim().is_empty() || e.contains('.')) {
        return Err(AuditError::Config(format!(
            "rules.model_extensions entries must be bare extensions without dots, got '{ext}'"
        )));
    }
    Ok(())
}

fn validate_output_section(config: &Config) -> Result<()> {
    if let Some(format) = &config.output.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| AuditError::Config(format!("output.format: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
