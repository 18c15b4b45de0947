use super::*;
use crate::report::fixtures::sample_summary;

#[test]
fn summary_table_has_one_row_per_check() {
    let output = MarkdownFormatter::new().format(&sample_summary()).unwrap();

    assert!(output.starts_with("## Drawing Audit Results"));
    assert!(output.contains("| Naming | 3 | 2 | 1 | 66.67% |"));
    assert!(output.contains("| Register | 3 | 2 | 1 | 66.67% |"));
    assert!(output.contains("| Title Block | 2 | 1 | 1 | 50% |"));
    assert!(output.contains("**Overall compliance: 61%** across 3 files"));
}

#[test]
fn findings_table_lists_failures() {
    let output = MarkdownFormatter::new().format(&sample_summary()).unwrap();

    assert!(output.contains("### Findings"));
    assert!(output.contains("| ❌ Missing File | `PRJ-004.pdf` | Missing |"));
    assert!(output.contains("| ❌ Title Block | `PRJ-002.PDF` | MISMATCH | revCode: expected B, got C |"));
    assert!(!output.contains("### Passed"));
}

#[test]
fn passed_section_on_request() {
    let output = MarkdownFormatter::new()
        .with_passed(true)
        .format(&sample_summary())
        .unwrap();

    assert!(output.contains("### Passed"));
    assert!(output.contains("| ✅ Naming | `PRJ-001.pdf` |"));
    assert!(output.contains("| ✅ Title Block | `PRJ-001.PDF` |"));
}

#[test]
fn pipes_in_comments_are_escaped() {
    assert_eq!(escape_cell("a|b"), "a\\|b");
}
