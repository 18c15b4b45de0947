use std::fs;

use tempfile::TempDir;

use super::*;

fn delivery() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("sheets")).unwrap();
    fs::create_dir_all(dir.path().join("models")).unwrap();
    fs::create_dir_all(dir.path().join("archive")).unwrap();
    for file in [
        "sheets/PRJ-002.pdf",
        "sheets/PRJ-001.PDF",
        "models/PRJ-M01.rvt",
        "archive/PRJ-000.pdf",
        "notes.txt",
    ] {
        fs::write(dir.path().join(file), "").unwrap();
    }
    dir
}

fn scan(extensions: &[&str], exclude: &[&str]) -> Vec<ActualFileEntry> {
    let dir = delivery();
    let exclude: Vec<String> = exclude.iter().map(ToString::to_string).collect();
    let scope = DeliveryScope::new(ExtensionSet::new(extensions), &exclude).unwrap();
    DirectoryScanner::new(scope).scan(dir.path()).unwrap()
}

#[test]
fn finds_every_file_without_filters() {
    let files = scan(&[], &[]);
    assert_eq!(files.len(), 5);
}

#[test]
fn paths_are_relative_and_sorted() {
    let files = scan(&[], &[]);
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "archive/PRJ-000.pdf",
            "models/PRJ-M01.rvt",
            "notes.txt",
            "sheets/PRJ-001.PDF",
            "sheets/PRJ-002.pdf",
        ]
    );
    assert_eq!(files[3].name, "PRJ-001.PDF");
    assert_eq!(files[3].extension, "pdf");
    assert_eq!(files[3].folder_path(), "sheets");
}

#[test]
fn extension_filter_ignores_case() {
    let files = scan(&["pdf"], &[]);
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.extension == "pdf"));
}

#[test]
fn exclude_globs_match_relative_paths() {
    let files = scan(&["pdf", "rvt"], &["archive/**"]);
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["PRJ-M01.rvt", "PRJ-001.PDF", "PRJ-002.pdf"]);
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let scope = DeliveryScope::new(ExtensionSet::default(), &[]).unwrap();
    let err = DirectoryScanner::new(scope)
        .scan(&dir.path().join("nope"))
        .unwrap_err();
    assert_eq!(err.error_type(), "FileRead");
}

#[test]
fn file_list_skips_blanks_and_comments() {
    let files = parse_file_list("# delivery 3\nsheets/A-01.pdf\n\n  models/B-01.rvt  \nC-01.pdf\n");

    assert_eq!(files.len(), 3);
    assert_eq!(files[0].name, "A-01.pdf");
    assert_eq!(files[0].folder_path(), "sheets");
    assert_eq!(files[1].name, "B-01.rvt");
    assert_eq!(files[2].folder_path(), "");
}

#[test]
fn file_list_from_disk() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("files.txt");
    fs::write(&list, "A.pdf\nB.pdf\n").unwrap();

    let files = load_file_list(&list).unwrap();
    assert_eq!(files.len(), 2);

    let err = load_file_list(&dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.error_type(), "FileRead");
}
