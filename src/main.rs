use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use drawing_audit::cli::{Cli, Commands};
use drawing_audit::commands::{run_audit, run_config, run_init, run_naming};

/// Log level picked from the global flags; `RUST_LOG` takes precedence.
const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

fn init_tracing(cli: &Cli) {
    let level = log_level(cli.verbose, cli.quiet);
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("drawing_audit={level}"))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Audit(args) => run_audit(args, &cli),
        Commands::Naming(args) => run_naming(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
