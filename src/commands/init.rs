use std::fs;

use crate::cli::InitArgs;
use crate::config::{generate_config_template, parse_config};
use crate::output::print_error;
use crate::{AuditError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(AuditError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();
    // Never write a template the loader would reject
    parse_config(&template)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
