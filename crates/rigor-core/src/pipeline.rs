//! Audit pipeline: turns an uploaded document into a full report.
//!
//! Stages run sequentially: text extraction, reference extraction,
//! citation verification, methodology and reproducibility checks, AI
//! content estimation, novelty scoring, then aggregation. Extraction
//! failure never aborts the audit; it degrades to the simulated
//! fallback so a submission always ends with a report.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rigor_extract::{DocumentFormat, extract_text};

use crate::citations::{CitationVerifier, DEFAULT_COURTESY_DELAY, DEFAULT_SAMPLE_SIZE};
use crate::lookup::BibliographicLookup;
use crate::novelty::{NoveltyScorer, PlaceholderNovelty};
use crate::report::{
    AuditReport, DatasetAnalysis, Provenance, ReportSummary, RiskLevel, ScoreSummary,
    build_suggestions, page_count, utc_timestamp, weighted_integrity, word_count,
};
use crate::simulated::{FallbackAudit, SimulatedAudit};
use crate::{ai_content, methodology, references, reproducibility};

/// A submission as handed to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct AuditInput {
    pub data: Vec<u8>,
    /// `None` means the filename matched no supported format.
    pub format: Option<DocumentFormat>,
    pub repository_url: Option<String>,
    pub dataset_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditOutcome {
    pub scores: ScoreSummary,
    pub report: AuditReport,
    /// Plain text pulled from the document, kept for the corrections
    /// endpoint. Empty on the simulated path.
    pub extracted_text: String,
}

/// Sequential audit runner. Holds the bibliographic lookup plus the
/// pluggable novelty and fallback strategies.
pub struct Auditor {
    lookup: Arc<dyn BibliographicLookup>,
    novelty: Arc<dyn NoveltyScorer>,
    fallback: Arc<dyn FallbackAudit>,
    sample_size: usize,
    courtesy_delay: Duration,
}

impl Auditor {
    pub fn new(lookup: Arc<dyn BibliographicLookup>) -> Self {
        Self {
            lookup,
            novelty: Arc::new(PlaceholderNovelty),
            fallback: Arc::new(SimulatedAudit),
            sample_size: DEFAULT_SAMPLE_SIZE,
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        }
    }

    pub fn with_novelty(mut self, novelty: Arc<dyn NoveltyScorer>) -> Self {
        self.novelty = novelty;
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackAudit>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    /// Runs the full audit. Infallible: anything that prevents real
    /// analysis degrades to the simulated fallback instead of erroring.
    pub async fn audit(&self, input: AuditInput) -> AuditOutcome {
        let text = match input.format {
            Some(format) => match extract_text(&input.data, format) {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(%error, "text extraction failed");
                    String::new()
                }
            },
            None => {
                tracing::warn!("document format not recognized");
                String::new()
            }
        };

        if text.is_empty() {
            tracing::info!("no usable text, producing simulated report");
            return self.fallback.simulate();
        }
        tracing::debug!(chars = text.chars().count(), "extracted text");

        let refs = references::extract_references(&text);
        tracing::debug!(count = refs.len(), "extracted references");

        let verifier = CitationVerifier::new(Arc::clone(&self.lookup))
            .with_sample_size(self.sample_size)
            .with_courtesy_delay(self.courtesy_delay);
        let citations = verifier.analyze(&refs).await;

        let methodology = methodology::analyze(&text);

        let dataset_supplied = input.dataset_path.is_some();
        let reproducibility =
            reproducibility::analyze(&text, input.repository_url.as_deref(), dataset_supplied);

        let ai_content = ai_content::estimate(&text);
        let novelty = self.novelty.score(&text);

        let integrity_score = weighted_integrity(
            citations.score,
            methodology.score,
            reproducibility.score,
            novelty.score,
        );
        let suggestions = build_suggestions(&citations, &methodology, &reproducibility);
        let dataset_analysis = if dataset_supplied {
            DatasetAnalysis::analyzed()
        } else {
            DatasetAnalysis::skipped()
        };

        let scores = ScoreSummary {
            integrity_score,
            citation_score: citations.score,
            methodology_score: methodology.score,
            reproducibility_score: reproducibility.score,
            novelty_score: novelty.score,
            ai_probability_score: ai_content.probability,
        };
        tracing::info!(
            integrity = scores.integrity_score,
            citations = scores.citation_score,
            "audit complete"
        );

        let report = AuditReport {
            summary: ReportSummary {
                integrity_score,
                risk_level: RiskLevel::from_score(integrity_score),
                provenance: Provenance::Real,
                audit_date: utc_timestamp(),
                word_count: word_count(&text),
                page_count: page_count(&text),
            },
            citations,
            methodology,
            reproducibility,
            novelty,
            ai_content,
            dataset_analysis,
            suggestions,
        };

        AuditOutcome {
            scores,
            report,
            extracted_text: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::mock::{MockLookup, MockResponse};

    fn mock_auditor() -> (Auditor, Arc<MockLookup>) {
        let lookup = Arc::new(MockLookup::new("mock", MockResponse::NotFound));
        let auditor = Auditor::new(lookup.clone()).with_courtesy_delay(Duration::ZERO);
        (auditor, lookup)
    }

    #[tokio::test]
    async fn test_unknown_format_yields_simulated_report() {
        let (auditor, lookup) = mock_auditor();
        let outcome = auditor
            .audit(AuditInput {
                data: b"plain text, not a recognized container".to_vec(),
                ..Default::default()
            })
            .await;

        assert_eq!(outcome.report.summary.provenance, Provenance::Simulated);
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_document_yields_simulated_report() {
        let (auditor, lookup) = mock_auditor();
        let outcome = auditor
            .audit(AuditInput {
                data: b"not really a pdf".to_vec(),
                format: Some(DocumentFormat::Pdf),
                ..Default::default()
            })
            .await;

        assert_eq!(outcome.report.summary.provenance, Provenance::Simulated);
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn test_simulated_fallback_has_empty_detail_lists() {
        let (auditor, _lookup) = mock_auditor();
        let outcome = auditor.audit(AuditInput::default()).await;

        assert!(outcome.report.citations.issues.is_empty());
        assert!(outcome.report.novelty.similar_works.is_empty());
        assert_eq!(outcome.report.summary.word_count, 0);
        assert!(outcome.extracted_text.is_empty());
    }
}
