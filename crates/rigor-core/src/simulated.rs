//! Simulated fallback audit.
//!
//! When a submission yields no usable text the pipeline still has to
//! produce a complete report, so this module fabricates one with scores
//! drawn from plausible bands and every detail list left empty. Reports
//! built here are marked with simulated provenance so consumers can
//! tell them apart from real analysis.

use crate::ai_content::AiContentAnalysis;
use crate::citations::CitationAnalysis;
use crate::methodology::MethodologyAnalysis;
use crate::novelty::NoveltyAnalysis;
use crate::pipeline::AuditOutcome;
use crate::report::{
    AuditReport, DatasetAnalysis, Provenance, ReportSummary, RiskLevel, ScoreSummary,
    utc_timestamp,
};
use crate::reproducibility::ReproducibilityAnalysis;

/// Seam for the fallback path, mockable in pipeline tests.
pub trait FallbackAudit: Send + Sync {
    fn simulate(&self) -> AuditOutcome;
}

#[derive(Debug, Default)]
pub struct SimulatedAudit;

impl FallbackAudit for SimulatedAudit {
    fn simulate(&self) -> AuditOutcome {
        let integrity_score = fastrand::u8(70..=95);
        let citation_score = fastrand::u8(75..=100);
        let methodology_score = fastrand::u8(65..=90);
        let reproducibility_score = fastrand::u8(55..=85);
        let novelty_score = fastrand::u8(50..=90);
        let ai_probability_score = fastrand::u8(10..=70);

        let total_checked = fastrand::usize(15..=40);
        let broken_count = fastrand::usize(0..=5);

        let report = AuditReport {
            summary: ReportSummary {
                integrity_score,
                risk_level: RiskLevel::from_score(integrity_score),
                provenance: Provenance::Simulated,
                audit_date: utc_timestamp(),
                word_count: 0,
                page_count: 0,
            },
            citations: CitationAnalysis {
                total_checked,
                verified_count: total_checked - broken_count,
                broken_count,
                score: citation_score,
                issues: Vec::new(),
            },
            methodology: MethodologyAnalysis {
                score: methodology_score,
                issues: Vec::new(),
            },
            reproducibility: ReproducibilityAnalysis {
                score: reproducibility_score,
                checklist: Vec::new(),
            },
            novelty: NoveltyAnalysis {
                score: novelty_score,
                similar_works: Vec::new(),
            },
            ai_content: AiContentAnalysis {
                probability: ai_probability_score,
                sections_flagged: Vec::new(),
            },
            dataset_analysis: DatasetAnalysis::skipped(),
            suggestions: vec![
                "Expand the related work section.".to_string(),
                "Clarify the hyperparameters used.".to_string(),
                "Provide a link to the code repository.".to_string(),
            ],
        };

        AuditOutcome {
            scores: ScoreSummary {
                integrity_score,
                citation_score,
                methodology_score,
                reproducibility_score,
                novelty_score,
                ai_probability_score,
            },
            report,
            extracted_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DatasetStatus;

    #[test]
    fn test_simulated_scores_stay_in_bands() {
        let fallback = SimulatedAudit;
        for _ in 0..50 {
            let outcome = fallback.simulate();
            let s = &outcome.scores;
            assert!((70..=95).contains(&s.integrity_score));
            assert!((75..=100).contains(&s.citation_score));
            assert!((65..=90).contains(&s.methodology_score));
            assert!((55..=85).contains(&s.reproducibility_score));
            assert!((50..=90).contains(&s.novelty_score));
            assert!((10..=70).contains(&s.ai_probability_score));
        }
    }

    #[test]
    fn test_simulated_citation_counts_are_consistent() {
        for _ in 0..50 {
            let outcome = SimulatedAudit.simulate();
            let c = &outcome.report.citations;
            assert!((15..=40).contains(&c.total_checked));
            assert!(c.broken_count <= 5);
            assert_eq!(c.verified_count + c.broken_count, c.total_checked);
        }
    }

    #[test]
    fn test_simulated_report_shape() {
        let outcome = SimulatedAudit.simulate();
        let report = &outcome.report;

        assert_eq!(report.summary.provenance, Provenance::Simulated);
        assert_eq!(
            report.summary.risk_level,
            RiskLevel::from_score(report.summary.integrity_score)
        );
        assert_eq!(report.summary.word_count, 0);
        assert_eq!(report.summary.page_count, 0);

        assert!(report.citations.issues.is_empty());
        assert!(report.methodology.issues.is_empty());
        assert!(report.reproducibility.checklist.is_empty());
        assert!(report.novelty.similar_works.is_empty());
        assert!(report.ai_content.sections_flagged.is_empty());
        assert_eq!(report.dataset_analysis.status, DatasetStatus::Skipped);

        assert_eq!(
            report.suggestions,
            vec![
                "Expand the related work section.",
                "Clarify the hyperparameters used.",
                "Provide a link to the code repository."
            ]
        );
    }

    #[test]
    fn test_scores_mirror_report_summary() {
        let outcome = SimulatedAudit.simulate();
        assert_eq!(
            outcome.scores.integrity_score,
            outcome.report.summary.integrity_score
        );
        assert_eq!(outcome.scores.citation_score, outcome.report.citations.score);
        assert_eq!(
            outcome.scores.novelty_score,
            outcome.report.novelty.score
        );
    }
}
