//! Report assembly: aggregate scoring, risk banding, suggestions, and
//! the serialized report shape consumed by the API layer.

use serde::{Deserialize, Serialize};

use crate::ai_content::AiContentAnalysis;
use crate::citations::CitationAnalysis;
use crate::methodology::MethodologyAnalysis;
use crate::novelty::NoveltyAnalysis;
use crate::reproducibility::ReproducibilityAnalysis;

/// Rough pages-per-character estimate for plain extracted text.
const CHARS_PER_PAGE: usize = 3000;

const CITATION_WEIGHT: f64 = 0.3;
const METHODOLOGY_WEIGHT: f64 = 0.25;
const REPRODUCIBILITY_WEIGHT: f64 = 0.25;
const NOVELTY_WEIGHT: f64 = 0.2;

const METHODOLOGY_SUGGESTION_LIMIT: u8 = 80;
const REPRODUCIBILITY_SUGGESTION_LIMIT: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands an integrity score: above 85 is low risk, above 70 medium,
    /// anything else high.
    pub fn from_score(score: u8) -> Self {
        if score > 85 {
            RiskLevel::Low
        } else if score > 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// Whether the report came out of the real analysis path or the
/// simulated fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Real,
    Simulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetStatus {
    Analyzed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetAnalysis {
    pub status: DatasetStatus,
    pub anomalies: Vec<String>,
}

impl DatasetAnalysis {
    pub fn analyzed() -> Self {
        Self {
            status: DatasetStatus::Analyzed,
            anomalies: vec!["Dataset provided for analysis".to_string()],
        }
    }

    pub fn skipped() -> Self {
        Self {
            status: DatasetStatus::Skipped,
            anomalies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub integrity_score: u8,
    pub risk_level: RiskLevel,
    pub provenance: Provenance,
    pub audit_date: String,
    pub word_count: usize,
    pub page_count: usize,
}

/// Full audit report, serialized as-is into API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub summary: ReportSummary,
    pub citations: CitationAnalysis,
    pub methodology: MethodologyAnalysis,
    pub reproducibility: ReproducibilityAnalysis,
    pub novelty: NoveltyAnalysis,
    pub ai_content: AiContentAnalysis,
    pub dataset_analysis: DatasetAnalysis,
    pub suggestions: Vec<String>,
}

/// Flat per-dimension scores, stored alongside the report for listings
/// that do not need the full JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub integrity_score: u8,
    pub citation_score: u8,
    pub methodology_score: u8,
    pub reproducibility_score: u8,
    pub novelty_score: u8,
    pub ai_probability_score: u8,
}

/// Weighted blend of the four quality dimensions, rounded to the
/// nearest point. AI probability is reported but deliberately excluded
/// from the blend.
pub fn weighted_integrity(citations: u8, methodology: u8, reproducibility: u8, novelty: u8) -> u8 {
    let blended = f64::from(citations) * CITATION_WEIGHT
        + f64::from(methodology) * METHODOLOGY_WEIGHT
        + f64::from(reproducibility) * REPRODUCIBILITY_WEIGHT
        + f64::from(novelty) * NOVELTY_WEIGHT;
    blended.round() as u8
}

/// Actionable suggestions: conditional entries keyed off weak
/// dimensions, then three fixed editorial prompts.
pub fn build_suggestions(
    citations: &CitationAnalysis,
    methodology: &MethodologyAnalysis,
    reproducibility: &ReproducibilityAnalysis,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if citations.broken_count > 0 {
        suggestions.push(format!(
            "Verify and fix {} broken citations.",
            citations.broken_count
        ));
    }
    if methodology.score < METHODOLOGY_SUGGESTION_LIMIT {
        suggestions.push(
            "Strengthen methodology section with more details on experimental design.".to_string(),
        );
    }
    if reproducibility.score < REPRODUCIBILITY_SUGGESTION_LIMIT {
        suggestions.push(
            "Improve reproducibility by providing code repository and dataset links.".to_string(),
        );
    }

    suggestions.extend(
        [
            "Expand the related work section to include recent 2023-2024 papers.",
            "Add more visualizations to support your findings.",
            "Consider adding a limitations section to discuss potential weaknesses.",
        ]
        .map(String::from),
    );

    suggestions
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn page_count(text: &str) -> usize {
    text.chars().count() / CHARS_PER_PAGE
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn utc_timestamp() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_timestamp(now)
}

fn format_timestamp(secs: u64) -> String {
    let secs_per_day = 86400u64;
    let days = secs / secs_per_day;
    let time_of_day = secs % secs_per_day;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;
    let (year, month, day) = days_to_ymd(days);
    format!("{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}Z")
}

/// Convert days since Unix epoch to (year, month, day).
fn days_to_ymd(days: u64) -> (u64, u64, u64) {
    // Simplified civil calendar conversion
    let z = days + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
