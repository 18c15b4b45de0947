//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.join(".drawing-audit.toml")).unwrap();
    assert!(content.contains("version = \"1\""));
    assert!(content.contains("[title_block]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["init", "--output", "audit/custom.toml"])
        .assert()
        .success();

    assert!(fixture.join("audit/custom.toml").is_file());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_existing() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.join(".drawing-audit.toml")).unwrap();
    assert!(!content.contains("existing config"));
}

#[test]
fn generated_config_passes_validation() {
    let fixture = TestFixture::new();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
