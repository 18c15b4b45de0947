//! A small audit shared by report and output tests.
//!
//! Three delivered files, one with a bad name. The register lists one file that
//! was never delivered, and one title block carries the wrong revision.

use crate::table::Table;
use crate::validator::{
    ActualFileEntry, MissingFilesValidator, NamingValidator, TitleBlockValidator,
};

use super::{CombinedSummary, aggregate};

fn naming_rules() -> Table {
    let mut table = Table::new("rules");
    table.push_text_row(["Naming convention", "", "", "-"]);
    table.push_text_row(["", "Project", "Number"]);
    table.push_text_row(["", "PRJ", "001"]);
    table.push_text_row(["", "", "002"]);
    table
}

fn register() -> Table {
    let mut table = Table::new("register");
    table.push_text_row(["File Name"]);
    for name in ["PRJ-001.pdf", "PRJ-002.pdf", "PRJ-004.pdf"] {
        table.push_text_row([name]);
    }
    table
}

fn title_blocks(second_rev: &str) -> Table {
    let mut table = Table::new("title_blocks");
    table.push_text_row(["Sheet No", "Sheet Name", "File Name", "Rev", "Rev Date", "Suitability"]);
    table.push_text_row(["001", "Plan", "PRJ-001.pdf", "A", "01.01.2025", "S2"]);
    table.push_text_row(["002", "Section", "PRJ-002.pdf", second_rev, "", ""]);
    table
}

pub fn delivered_files() -> Vec<ActualFileEntry> {
    ["PRJ-001.pdf", "PRJ-002.pdf", "XYZ-003.pdf"]
        .into_iter()
        .map(|name| ActualFileEntry::new(name, format!("delivery/{name}")))
        .collect()
}

/// naming 66.67, found 66.67, title block 50: overall 61.
pub fn sample_summary() -> CombinedSummary {
    let files = delivered_files();

    let mut naming = NamingValidator::new();
    naming.load_rules(&naming_rules(), &naming_rules());

    let mut missing = MissingFilesValidator::new();
    missing.load_expected_files(&register(), 0);
    missing.load_actual_files(files.clone());

    let mut title_block = TitleBlockValidator::new();
    title_block.load_register_data(&title_blocks("B"), None);
    title_block.load_title_block_data(&title_blocks("C"), None);

    aggregate(
        naming.validate_files(&files),
        missing.validate(),
        title_block.validate(),
    )
}
