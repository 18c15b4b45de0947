//! Comparison-stable forms of text, dates and file names.
//!
//! Every validator goes through these functions before comparing values, so
//! whitespace, case and date-format differences never defeat a match.
//! [`normalize_for_comparison`] is the only key function for file names: use it
//! on both sides of every file-name comparison.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::table::Cell;

const MONTHS: [(&str, u32); 12] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
];

/// `dd.mm.yyyy`
static DOTTED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").expect("Invalid regex")
});

/// `dd/mm/yyyy`
static SLASHED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("Invalid regex")
});

/// `dd.MON.yyyy` (also accepts `/` or `-` between the parts)
static MONTH_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[./-]([A-Za-z]{3})[./-]([0-9]{4})$").expect("Invalid regex")
});

/// `dd/mm/yy`
static SHORT_YEAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$").expect("Invalid regex")
});

/// Formats tried, in order, when none of the literal patterns match.
const FALLBACK_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Trim, collapse internal whitespace runs to one space, upper-case.
#[must_use]
pub fn normalize_text(value: &str) -> String {
    collapse_whitespace(value).to_uppercase()
}

/// [`normalize_text`] for any cell; numbers are stringified, blanks become `""`.
#[must_use]
pub fn normalize_cell_text(cell: &Cell) -> String {
    normalize_text(&cell.as_text())
}

/// Canonicalize a date to `dd/mm/yyyy`.
///
/// Unrecognized input is returned trimmed and otherwise unchanged.
#[must_use]
pub fn normalize_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    recognize_literal_date(trimmed)
        .or_else(|| parse_generic_date(trimmed))
        .unwrap_or_else(|| trimmed.to_string())
}

/// [`normalize_date`] for any cell.
#[must_use]
pub fn normalize_cell_date(cell: &Cell) -> String {
    normalize_date(&cell.as_text())
}

/// Remove everything from the last `.` onwards. No-op without a `.`.
#[must_use]
pub fn strip_extension(name: &str) -> &str {
    name.rfind('.').map_or(name, |idx| &name[..idx])
}

/// The key used to match file names across register, disk and title-block export.
#[must_use]
pub fn normalize_for_comparison(name: &str) -> String {
    let lowered = strip_extension(name).to_lowercase();
    let composed: String = lowered.nfc().collect();
    collapse_whitespace(&composed)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn month_number(abbrev: &str) -> Option<u32> {
    let upper = abbrev.to_ascii_uppercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, number)| *number)
}

fn format_dmy(day: &str, month: u32, year: &str) -> Option<String> {
    let day: u32 = day.parse().ok()?;
    Some(format!("{day:02}/{month:02}/{year}"))
}

fn recognize_literal_date(value: &str) -> Option<String> {
    if let Some(caps) = DOTTED_DATE
        .captures(value)
        .or_else(|| SLASHED_DATE.captures(value))
    {
        let month: u32 = caps[2].parse().ok()?;
        return format_dmy(&caps[1], month, &caps[3]);
    }

    if let Some(caps) = MONTH_NAME_DATE.captures(value) {
        // An unknown abbreviation is not a recognized pattern
        let month = month_number(&caps[2])?;
        return format_dmy(&caps[1], month, &caps[3]);
    }

    if let Some(caps) = SHORT_YEAR_DATE.captures(value) {
        let month: u32 = caps[2].parse().ok()?;
        let year = format!("20{}", &caps[3]);
        return format_dmy(&caps[1], month, &year);
    }

    None
}

fn parse_generic_date(value: &str) -> Option<String> {
    let date = FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            FALLBACK_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })?;

    Some(date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
