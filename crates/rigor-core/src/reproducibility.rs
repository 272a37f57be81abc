//! Reproducibility checklist heuristics.
//!
//! Additive scoring from a baseline of 50: points for an available code
//! repository, an available dataset, and documented parameters. Each check
//! also lands in a fixed-order checklist for the report.

use serde::{Deserialize, Serialize};

const BASELINE_SCORE: u32 = 50;
const CODE_POINTS: u32 = 20;
const DATA_POINTS: u32 = 20;
const PARAMS_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistStatus {
    Provided,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    pub status: ChecklistStatus,
    pub comment: String,
}

impl ChecklistItem {
    fn new(item: &str, provided: bool, yes: &str, no: &str) -> Self {
        Self {
            item: item.to_string(),
            status: if provided {
                ChecklistStatus::Provided
            } else {
                ChecklistStatus::Missing
            },
            comment: if provided { yes } else { no }.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproducibilityAnalysis {
    pub score: u8,
    pub checklist: Vec<ChecklistItem>,
}

/// Score reproducibility signals from the text plus submission hints.
///
/// `repository_url` is the link supplied with the submission (if any);
/// `dataset_supplied` says whether a dataset file accompanied it.
pub fn analyze(
    text: &str,
    repository_url: Option<&str>,
    dataset_supplied: bool,
) -> ReproducibilityAnalysis {
    let lower = text.to_lowercase();
    let mut score = BASELINE_SCORE;
    let mut checklist = Vec::new();

    let code_available = repository_url.is_some_and(|url| !url.is_empty())
        || lower.contains("github.com")
        || lower.contains("code available");
    if code_available {
        score += CODE_POINTS;
    }
    checklist.push(ChecklistItem::new(
        "Code Available",
        code_available,
        "Code repository link found.",
        "No code repository link found.",
    ));

    let data_available = dataset_supplied || lower.contains("data available");
    if data_available {
        score += DATA_POINTS;
    }
    checklist.push(ChecklistItem::new(
        "Data Available",
        data_available,
        "Dataset provided or mentioned.",
        "No dataset provided.",
    ));

    let params_documented = lower.contains("hyperparameter") || lower.contains("parameter");
    if params_documented {
        score += PARAMS_POINTS;
    }
    checklist.push(ChecklistItem::new(
        "Parameters Documented",
        params_documented,
        "Parameters mentioned in text.",
        "No clear parameter documentation.",
    ));

    ReproducibilityAnalysis {
        score: score.min(100) as u8,
        checklist,
    }
}
