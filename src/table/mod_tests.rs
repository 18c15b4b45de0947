use super::*;

#[test]
fn parse_blank_and_whitespace() {
    assert_eq!(Cell::parse(""), Cell::Blank);
    assert_eq!(Cell::parse(" "), Cell::Text(" ".to_string()));
    assert!(Cell::parse("   ").is_blank());
}

#[test]
fn parse_numbers() {
    assert_eq!(Cell::parse("12"), Cell::Number(12.0));
    assert_eq!(Cell::parse("0"), Cell::Number(0.0));
    assert_eq!(Cell::parse("0.5"), Cell::Number(0.5));
    assert_eq!(Cell::parse("-3.25"), Cell::Number(-3.25));
}

#[test]
fn parse_keeps_leading_zero_identifiers_as_text() {
    assert_eq!(Cell::parse("002"), Cell::Text("002".to_string()));
    assert_eq!(Cell::parse("007.1"), Cell::Text("007.1".to_string()));
}

#[test]
fn parse_rejects_non_decimal_number_forms() {
    assert_eq!(Cell::parse("1e5"), Cell::Text("1e5".to_string()));
    assert_eq!(Cell::parse("inf"), Cell::Text("inf".to_string()));
    assert_eq!(Cell::parse("1.2.3"), Cell::Text("1.2.3".to_string()));
    assert_eq!(Cell::parse("-"), Cell::Text("-".to_string()));
}

#[test]
fn parse_keeps_values_that_would_not_render_back_as_text() {
    assert_eq!(Cell::parse("1.10"), Cell::Text("1.10".to_string()));
    assert_eq!(Cell::parse("1.0"), Cell::Text("1.0".to_string()));
    assert_eq!(Cell::parse("2.50"), Cell::Text("2.50".to_string()));
    assert_eq!(Cell::parse("-0"), Cell::Text("-0".to_string()));
    assert_eq!(Cell::parse("1.1"), Cell::Number(1.1));
}

#[test]
fn parsed_cells_render_their_source_text() {
    for raw in ["12", "0.5", "-3.25", "33.33", "1.10", "1.0", "002", "P01"] {
        assert_eq!(Cell::parse(raw).as_text(), raw, "{raw}");
    }
}

#[test]
fn as_text_renders_integral_numbers_without_fraction() {
    assert_eq!(Cell::Number(12.0).as_text(), "12");
    assert_eq!(Cell::Number(33.33).as_text(), "33.33");
    assert_eq!(Cell::Blank.as_text(), "");
    assert_eq!(Cell::Text("A-B".to_string()).as_text(), "A-B");
}

#[test]
fn as_str_only_for_text() {
    assert_eq!(Cell::Text("-".to_string()).as_str(), Some("-"));
    assert_eq!(Cell::Number(1.0).as_str(), None);
    assert_eq!(Cell::Blank.as_str(), None);
}

#[test]
fn cell_out_of_range_is_blank() {
    let table = Table::from_strings("t", &[&["a", "b"], &["c"]]);
    assert_eq!(table.cell(1, 1), &Cell::Blank);
    assert_eq!(table.cell(9, 0), &Cell::Blank);
    assert_eq!(table.text(0, 1), "b");
    assert_eq!(table.text(5, 5), "");
}

#[test]
fn data_rows_skip_header() {
    let table = Table::from_strings("t", &[&["File"], &["a.pdf"], &["b.pdf"]]);
    let rows: Vec<usize> = table.data_rows().map(|(i, _)| i).collect();
    assert_eq!(rows, vec![1, 2]);
}

#[test]
fn push_text_row_keeps_verbatim_text() {
    let mut table = Table::new("t");
    table.push_text_row(["002", "", "x"]);
    assert_eq!(table.cell(0, 0), &Cell::Text("002".to_string()));
    assert_eq!(table.cell(0, 1), &Cell::Blank);
    assert_eq!(table.len(), 1);
}

#[test]
fn push_row_accepts_mixed_cells() {
    let mut table = Table::new("t");
    table.push_row([Cell::from("Total"), Cell::from(3usize)]);
    assert_eq!(table.text(0, 1), "3");
}
