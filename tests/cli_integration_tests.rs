//! Integration tests for global CLI behavior and the `naming` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_commands_and_exit_codes() {
    drawing_audit!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("naming"))
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn version_flag_prints_version() {
    drawing_audit!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    drawing_audit!().arg("verify").assert().failure();
}

#[test]
fn naming_checks_given_names() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "--color",
            "never",
            "naming",
            "--sheet-rules",
            "rules.csv",
            "-n",
            "PRJ-001.pdf",
            "-n",
            "PRJ-01.pdf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ PRJ-01.pdf"))
        .stdout(predicate::str::contains("Expected: Project-Number"))
        .stdout(predicate::str::contains("Naming: 1/2 valid (50%)"));
}

#[test]
fn naming_scans_folder_with_semicolon_rules() {
    let fixture = TestFixture::new();
    fixture.create_file("rules.csv", "Rules;;;_\n;Project;Number\n;PRJ;Var\n");
    fixture.deliver(&["PRJ_7.pdf", "PRJ_12.pdf"]);

    drawing_audit!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "naming",
            "delivery",
            "--sheet-rules",
            "rules.csv",
            "--csv-delimiter",
            ";",
            "--fail-under",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Naming: 2/2 valid (100%)"));
}

#[test]
fn quiet_suppresses_stdout() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "naming", "--sheet-rules", "rules.csv", "-n", "PRJ-001.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let fixture = TestFixture::project();

    let output = drawing_audit!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args([
            "--no-config",
            "-v",
            "naming",
            "--sheet-rules",
            "rules.csv",
            "-n",
            "PRJ-001.pdf",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file name validated"));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], 1);
}
