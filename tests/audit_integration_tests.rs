//! Integration tests for the `audit` command.

mod common;

use common::{PROJECT_CONFIG, TestFixture};
use predicates::prelude::*;

fn audit_args() -> Vec<&'static str> {
    vec![
        "--no-config",
        "audit",
        "delivery",
        "--sheet-rules",
        "rules.csv",
        "--register",
        "register.csv",
        "--register-column",
        "2",
        "--title-blocks",
        "title_blocks.csv",
    ]
}

// =============================================================================
// Compliant Delivery
// =============================================================================

#[test]
fn compliant_delivery_reports_full_compliance() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Naming:       3/3 valid (100%)"))
        .stdout(predicate::str::contains("Register:     3/3 found, 0 missing, 0 extra"))
        .stdout(predicate::str::contains("Title blocks: 3/3 valid"))
        .stdout(predicate::str::contains("overall compliance 100%"));
}

#[test]
fn config_file_supplies_every_input() {
    let fixture = TestFixture::project();
    fixture.create_config(PROJECT_CONFIG);

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--fail-under", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 3 files checked"));
}

// =============================================================================
// Findings
// =============================================================================

#[test]
fn findings_cover_all_three_checks() {
    let fixture = TestFixture::project();
    fixture.withdraw("PRJ-003.pdf");
    fixture.deliver(&["ABC-009.pdf"]);
    fixture.create_file(
        "title_blocks.csv",
        "Sheet No,Sheet Name,File Name,Rev,Rev Date,Suitability\n\
         001,Ground Floor Plan,PRJ-001.pdf,A,01/03/2025,S2\n\
         002,Sections,PRJ-002.pdf,C,13.03.2025,S2\n",
    );

    drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Naming: ABC-009.pdf"))
        .stdout(predicate::str::contains("INVALID_PART: Part 1 (ABC) is not valid"))
        .stdout(predicate::str::contains("✗ Missing File: PRJ-003.pdf"))
        .stdout(predicate::str::contains("✗ Extra File: ABC-009.pdf"))
        .stdout(predicate::str::contains("MISMATCH: revCode: expected B, got C"))
        .stdout(predicate::str::contains("MISSING: titleBlock: expected Present, got Missing"));
}

#[test]
fn fail_under_exits_with_one() {
    let fixture = TestFixture::project();
    fixture.deliver(&["WRONG.pdf"]);

    drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .args(["--fail-under", "99"])
        .assert()
        .code(1);
}

#[test]
fn file_list_replaces_folder_scan() {
    let fixture = TestFixture::project();
    fixture.create_file("files.txt", "# delivered\nsheets/PRJ-001.pdf\nsheets/PRJ-002.pdf\n");

    let mut args = audit_args();
    args.retain(|a| *a != "delivery");
    drawing_audit!()
        .current_dir(fixture.path())
        .args(args)
        .args(["--file-list", "files.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Register:     2/3 found, 1 missing"));
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn json_output_is_machine_readable() {
    let fixture = TestFixture::project();

    let output = drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["overall_compliance"], 100.0);
    assert_eq!(value["total_files"], 3);
    assert_eq!(value["findings"].as_array().unwrap().len(), 0);
}

#[test]
fn markdown_output_written_to_file() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .args(["--format", "markdown", "--output", "report.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(fixture.join("report.md")).unwrap();
    assert!(report.contains("## Drawing Audit Results"));
    assert!(report.contains("**Overall compliance: 100%** across 3 files"));
}

#[test]
fn report_dir_receives_five_tables() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(audit_args())
        .args(["--report-dir", "reports"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Report tables written"));

    for name in [
        "summary.csv",
        "missing_files.csv",
        "naming_errors.csv",
        "title_block_errors.csv",
        "all_findings.csv",
    ] {
        assert!(fixture.join("reports").join(name).is_file(), "{name} missing");
    }
    let summary = std::fs::read_to_string(fixture.join("reports/summary.csv")).unwrap();
    assert!(summary.contains("Overall Compliance (%),100"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_register_setting_is_a_config_error() {
    let fixture = TestFixture::project();

    drawing_audit!()
        .current_dir(fixture.path())
        .args(["--no-config", "audit", "delivery", "--sheet-rules", "rules.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--register"));
}

#[test]
fn unreadable_table_is_reported() {
    let fixture = TestFixture::project();

    let args: Vec<_> = audit_args()
        .into_iter()
        .map(|a| if a == "title_blocks.csv" { "absent.csv" } else { a })
        .collect();
    drawing_audit!()
        .current_dir(fixture.path())
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("absent.csv"));
}
