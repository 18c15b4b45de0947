use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn audit_parses_sources_and_overrides() {
    let cli = Cli::parse_from([
        "drawing-audit",
        "-vv",
        "audit",
        "delivery",
        "--register",
        "register.csv",
        "--register-column",
        "2",
        "--sheet-rules",
        "sheets.csv",
        "--title-blocks",
        "export.csv",
        "--ext",
        "pdf,dwg",
        "-x",
        "old/**",
        "--format",
        "md",
        "--fail-under",
        "80%",
    ]);

    assert_eq!(cli.verbose, 2);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit");
    };
    assert_eq!(args.source.folder, Some(PathBuf::from("delivery")));
    assert_eq!(args.register, Some(PathBuf::from("register.csv")));
    assert_eq!(args.register_column, Some(2));
    assert_eq!(args.source.ext, Some(vec!["pdf".to_string(), "dwg".to_string()]));
    assert_eq!(args.source.exclude, vec!["old/**"]);
    assert_eq!(args.format, Some(OutputFormat::Markdown));
    assert_eq!(args.fail_under, Some(80.0));
    assert_eq!(args.source.csv_delimiter, ',');
}

#[test]
fn folder_conflicts_with_file_list() {
    let result = Cli::try_parse_from([
        "drawing-audit",
        "audit",
        "delivery",
        "--file-list",
        "files.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn fail_under_must_be_a_percentage() {
    assert!(Cli::try_parse_from(["drawing-audit", "audit", "--fail-under", "150"]).is_err());
    assert!(Cli::try_parse_from(["drawing-audit", "audit", "--fail-under", "most"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["drawing-audit", "audit", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn naming_collects_repeated_names() {
    let cli = Cli::parse_from(["drawing-audit", "naming", "-n", "A-1.pdf", "--name", "B-2.pdf"]);
    let Commands::Naming(args) = cli.command else {
        panic!("expected naming");
    };
    assert_eq!(args.names, vec!["A-1.pdf", "B-2.pdf"]);
    assert!(args.source.folder.is_none());
}

#[test]
fn init_defaults_to_local_config_file() {
    let cli = Cli::parse_from(["drawing-audit", "init"]);
    let Commands::Init(args) = cli.command else {
        panic!("expected init");
    };
    assert_eq!(args.output, PathBuf::from(".drawing-audit.toml"));
    assert!(!args.force);
}

#[test]
fn config_show_defaults_to_text() {
    let cli = Cli::parse_from(["drawing-audit", "--no-config", "config", "show"]);
    assert!(cli.no_config);
    let Commands::Config(ConfigArgs {
        action: ConfigAction::Show { config, format },
    }) = cli.command
    else {
        panic!("expected config show");
    };
    assert!(config.is_none());
    assert_eq!(format, "text");
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::parse_from(["drawing-audit", "audit", "--quiet", "--color", "never"]);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
}
