use serde::Serialize;

use super::CombinedSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckType {
    #[serde(rename = "Naming")]
    Naming,
    #[serde(rename = "Missing File")]
    MissingFile,
    #[serde(rename = "Extra File")]
    ExtraFile,
    #[serde(rename = "Title Block")]
    TitleBlock,
}

impl CheckType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naming => "Naming",
            Self::MissingFile => "Missing File",
            Self::ExtraFile => "Extra File",
            Self::TitleBlock => "Title Block",
        }
    }
}

/// One failing item from any check, in a uniform shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check_type: CheckType,
    pub file_name: String,
    pub status: String,
    pub comment: String,
}

/// Every failing item, grouped by check in the order naming, missing, extra, title block.
#[must_use]
pub fn collect_findings(summary: &CombinedSummary) -> Vec<Finding> {
    let naming = summary.naming.invalid_results().map(|r| Finding {
        check_type: CheckType::Naming,
        file_name: r.file_name.clone(),
        status: r
            .error_kind
            .map_or_else(|| r.compliance_label().to_string(), |k| k.as_str().to_string()),
        comment: r.details.clone(),
    });

    let missing = summary.missing.missing().map(|r| Finding {
        check_type: CheckType::MissingFile,
        file_name: r.expected_file.clone(),
        status: "Missing".to_string(),
        comment: format!("Listed in register row {} but not delivered", r.register_row),
    });

    let extra = summary.missing.extra_files.iter().map(|f| Finding {
        check_type: CheckType::ExtraFile,
        file_name: f.name.clone(),
        status: "Extra".to_string(),
        comment: format!("Delivered at {} but not in register", f.path),
    });

    let title_block = summary.title_block.failing_results().map(|r| Finding {
        check_type: CheckType::TitleBlock,
        file_name: r.register.display_name().to_string(),
        status: r.status.as_str().to_string(),
        comment: r.mismatch_summary(),
    });

    naming.chain(missing).chain(extra).chain(title_block).collect()
}
