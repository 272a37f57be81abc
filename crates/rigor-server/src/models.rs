use serde::Serialize;

use rigor_core::corrections::{Correction, CorrectionSummary};
use rigor_core::recommend::{Recommendation, SearchCriteria};

use crate::store::{StoredReport, SubmissionRecord, SubmissionStatus};

// ── Submission JSON ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionJson {
    pub id: u64,
    pub title: String,
    pub domain: String,
    pub degree_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportJson>,
}

/// Score card embedded in a submission once its audit completes. The
/// full report is carried as a JSON string under `json_content`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportJson {
    pub integrity_score: u8,
    pub citation_score: u8,
    pub methodology_score: u8,
    pub reproducibility_score: u8,
    pub novelty_score: u8,
    pub ai_probability_score: u8,
    pub json_content: String,
    pub created_at: String,
}

impl From<&SubmissionRecord> for SubmissionJson {
    fn from(r: &SubmissionRecord) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            domain: r.domain.clone(),
            degree_level: r.degree_level.clone(),
            github_url: r.repository_url.clone(),
            status: r.status,
            created_at: r.created_at.clone(),
            report: r.report.as_ref().map(ReportJson::from),
        }
    }
}

impl From<&StoredReport> for ReportJson {
    fn from(r: &StoredReport) -> Self {
        Self {
            integrity_score: r.scores.integrity_score,
            citation_score: r.scores.citation_score,
            methodology_score: r.scores.methodology_score,
            reproducibility_score: r.scores.reproducibility_score,
            novelty_score: r.scores.novelty_score,
            ai_probability_score: r.scores.ai_probability_score,
            json_content: serde_json::to_string(&r.report).unwrap_or_default(),
            created_at: r.created_at.clone(),
        }
    }
}

// ── Assistance envelopes ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CorrectionsJson {
    pub submission_id: u64,
    pub total_corrections: usize,
    pub corrections: Vec<Correction>,
    pub summary: CorrectionSummary,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsJson {
    pub submission_id: u64,
    pub total_recommendations: usize,
    pub recommendations: Vec<Recommendation>,
    pub search_criteria: SearchCriteria,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigor_core::simulated::{FallbackAudit, SimulatedAudit};
    use std::path::PathBuf;

    fn processing_record() -> SubmissionRecord {
        SubmissionRecord {
            id: 4,
            title: "Sparse Retrieval for Review".to_string(),
            domain: "Computer Science".to_string(),
            degree_level: "Masters".to_string(),
            repository_url: None,
            file_path: PathBuf::from("uploads/4.pdf"),
            dataset_path: None,
            status: SubmissionStatus::Processing,
            created_at: "2026-02-10T09:30:00Z".to_string(),
            report: None,
        }
    }

    #[test]
    fn test_submission_json_omits_absent_fields() {
        let json = serde_json::to_value(SubmissionJson::from(&processing_record())).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["status"], "processing");
        assert!(json.get("github_url").is_none());
        assert!(json.get("report").is_none());
    }

    #[test]
    fn test_submission_json_embeds_completed_report() {
        let outcome = SimulatedAudit.simulate();
        let mut record = processing_record();
        record.repository_url = Some("https://github.com/acme/paper".to_string());
        record.status = SubmissionStatus::Completed;
        record.report = Some(StoredReport {
            scores: outcome.scores,
            report: outcome.report,
            extracted_text: outcome.extracted_text,
            created_at: "2026-02-10T09:35:00Z".to_string(),
        });

        let json = serde_json::to_value(SubmissionJson::from(&record)).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["github_url"], "https://github.com/acme/paper");

        let report = &json["report"];
        assert_eq!(
            report["integrity_score"],
            u64::from(record.report.as_ref().unwrap().scores.integrity_score)
        );

        // json_content round-trips to the stored report object
        let embedded: serde_json::Value =
            serde_json::from_str(report["json_content"].as_str().unwrap()).unwrap();
        assert_eq!(embedded["summary"]["provenance"], "simulated");
        assert!(embedded.get("citations").is_some());
    }
}
