use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "drawing-audit")]
#[command(
    author,
    version,
    about = "Audit drawing deliveries against a register, a naming convention and title-block data"
)]
#[command(long_about = "Checks a set of delivered drawing files against three sources of truth:\n\
    the drawing register, the naming-convention rule tables and the title-block export.\n\n\
    Exit codes:\n  \
    0 - Audit completed\n  \
    1 - Overall compliance below --fail-under\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace) and list passing items
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all three checks and print the combined compliance summary
    Audit(AuditArgs),

    /// Check file names against the naming-convention rules only
    Naming(NamingArgs),

    /// Generate a starter configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Naming rules and where the delivered files come from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Delivery folder to scan (overrides `scanner.root`)
    pub folder: Option<PathBuf>,

    /// Newline-separated list of delivered files, instead of scanning a folder
    #[arg(long, conflicts_with = "folder")]
    pub file_list: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Naming rule table for sheet files (CSV)
    #[arg(long)]
    pub sheet_rules: Option<PathBuf>,

    /// Naming rule table for model files (CSV, defaults to the sheet rules)
    #[arg(long)]
    pub model_rules: Option<PathBuf>,

    /// Extensions treated as model files (comma-separated, e.g., rvt,ifc)
    #[arg(long, value_delimiter = ',')]
    pub model_ext: Option<Vec<String>>,

    /// Only audit files with these extensions (comma-separated, e.g., pdf,dwg)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Field delimiter of the input CSV files
    #[arg(long, default_value_t = ',')]
    pub csv_delimiter: char,
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Drawing register listing the expected files (CSV)
    #[arg(long)]
    pub register: Option<PathBuf>,

    /// 0-based register column holding the file name
    #[arg(long)]
    pub register_column: Option<usize>,

    /// Title-block export (CSV)
    #[arg(long)]
    pub title_blocks: Option<PathBuf>,

    /// Register metadata compared with the title blocks (defaults to --register)
    #[arg(long)]
    pub title_block_register: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the five CSV report tables into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Exit with code 1 when overall compliance is below this percentage
    #[arg(long, value_parser = parse_percentage)]
    pub fail_under: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct NamingArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// File names to check instead of the delivery files
    #[arg(long = "name", short = 'n')]
    pub names: Vec<String>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when naming compliance is below this percentage
    #[arg(long, value_parser = parse_percentage)]
    pub fail_under: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".drawing-audit.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".drawing-audit.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json, toml]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn parse_percentage(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 100"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
