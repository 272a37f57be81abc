//! Core audit pipeline for research papers.
//!
//! A document's extracted text flows through a fixed sequence of stages:
//! reference extraction, citation verification against a bibliographic
//! lookup service, heuristic methodology / reproducibility / AI-content
//! analysis, novelty scoring, and aggregation into a single integrity score
//! with a JSON-serializable [`report::AuditReport`]. Documents that yield no
//! text downgrade to a clearly marked simulated report instead of failing.

pub mod ai_content;
pub mod citations;
pub mod corrections;
pub mod lookup;
pub mod methodology;
pub mod novelty;
pub mod pipeline;
pub mod recommend;
pub mod references;
pub mod report;
pub mod reproducibility;
pub mod simulated;
pub mod text_utils;

// Re-export for convenience
pub use citations::{CitationAnalysis, CitationVerifier};
pub use lookup::{BibliographicLookup, CrossrefClient, LookupError, Work};
pub use pipeline::{AuditInput, AuditOutcome, Auditor};
pub use report::{AuditReport, Provenance, RiskLevel, ScoreSummary};

use serde::{Deserialize, Serialize};

/// Severity of a single audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A single finding attached to an analysis section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based ordinal within the analysis that produced the finding.
    pub id: usize,
    /// Finding category ("Citation", "Sample Size", ...). The corrections
    /// layer routes on this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Excerpt of the offending source text, capped at 100 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub description: String,
    pub severity: Severity,
}
