use serde::Serialize;

use crate::error::Result;
use crate::report::{CombinedSummary, Finding, collect_findings};
use crate::validator::{MissingFilesSummary, NamingSummary, TitleBlockSummary};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    overall_compliance: f64,
    total_files: usize,
    naming: &'a NamingSummary,
    missing: MissingOutput<'a>,
    title_block: &'a TitleBlockSummary,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct MissingOutput<'a> {
    #[serde(flatten)]
    summary: &'a MissingFilesSummary,
    found_percentage: f64,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &CombinedSummary) -> Result<String> {
        let output = JsonOutput {
            overall_compliance: summary.overall_compliance,
            total_files: summary.total_files,
            naming: &summary.naming,
            missing: MissingOutput {
                summary: &summary.missing,
                found_percentage: summary.missing.found_percentage(),
            },
            title_block: &summary.title_block,
            findings: collect_findings(summary),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
