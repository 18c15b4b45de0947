use super::*;
use crate::table::Table;
use crate::validator::NamingValidator;

fn summary() -> NamingSummary {
    let mut rules = Table::new("rules");
    rules.push_text_row(["Naming convention", "", "", "-"]);
    rules.push_text_row(["", "Project", "Number"]);
    rules.push_text_row(["", "PRJ", "Var"]);

    let mut validator = NamingValidator::new();
    validator.load_rules(&rules, &rules);
    NamingSummary::from_results(vec![
        validator.validate_file_name("PRJ-001.pdf", ""),
        validator.validate_file_name("ABC-001.pdf", ""),
    ])
}

#[test]
fn text_lists_invalid_names_with_expected_pattern() {
    let output = NamingFormatter::new(OutputFormat::Text, ColorMode::Never, 0)
        .format(&summary())
        .unwrap();

    assert!(output.contains("✗ ABC-001.pdf"));
    assert!(output.contains("INVALID_PART: Part 1 (ABC) is not valid"));
    assert!(output.contains("Expected: Project-Number"));
    assert!(!output.contains("PRJ-001.pdf"));
    assert!(output.ends_with("Naming: 1/2 valid (50%)\n"));
}

#[test]
fn verbose_text_lists_valid_names() {
    let output = NamingFormatter::new(OutputFormat::Text, ColorMode::Never, 1)
        .format(&summary())
        .unwrap();
    assert!(output.contains("✓ PRJ-001.pdf"));
}

#[test]
fn json_serializes_every_result() {
    let output = NamingFormatter::new(OutputFormat::Json, ColorMode::Always, 0)
        .format(&summary())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total"], 2);
    assert_eq!(value["results"][1]["error_kind"], "INVALID_PART");
    assert!(!output.contains('\x1b'));
}

#[test]
fn markdown_has_a_row_per_invalid_name() {
    let output = NamingFormatter::new(OutputFormat::Markdown, ColorMode::Never, 0)
        .format(&summary())
        .unwrap();

    assert!(output.contains("**1/2 valid (50%)**"));
    assert!(output.contains("| `ABC-001.pdf` | INVALID_PART |"));
    assert!(!output.contains("PRJ-001.pdf"));
}
