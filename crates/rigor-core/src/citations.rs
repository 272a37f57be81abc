//! Citation verification against a bibliographic lookup service.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lookup::BibliographicLookup;
use crate::text_utils::truncate_chars;
use crate::{Issue, Severity};

/// How many references are live-checked before extrapolating.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
/// Pause after every lookup, a courtesy to the public API.
pub const DEFAULT_COURTESY_DELAY: Duration = Duration::from_millis(100);
/// Queries are clipped to this many characters before hitting the wire.
const MAX_QUERY_CHARS: usize = 200;
/// Relevance below this marks a found work as a low-confidence match.
const LOW_CONFIDENCE_RELEVANCE: f64 = 50.0;
/// Issue excerpts keep at most this many characters of the raw reference.
const EXCERPT_CHARS: usize = 100;

/// Outcome of citation verification over one reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationAnalysis {
    pub total_checked: usize,
    pub verified_count: usize,
    pub broken_count: usize,
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// Verifies extracted references against a lookup service.
///
/// Only the first [`DEFAULT_SAMPLE_SIZE`] references are checked live;
/// counts for the remainder are extrapolated from the sampled rates. A
/// failed lookup counts the citation as broken and never aborts the batch.
pub struct CitationVerifier {
    lookup: Arc<dyn BibliographicLookup>,
    sample_size: usize,
    courtesy_delay: Duration,
}

impl CitationVerifier {
    pub fn new(lookup: Arc<dyn BibliographicLookup>) -> Self {
        Self {
            lookup,
            sample_size: DEFAULT_SAMPLE_SIZE,
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    pub async fn analyze(&self, references: &[String]) -> CitationAnalysis {
        let total_checked = references.len();
        let mut verified_count = 0usize;
        let mut broken_count = 0usize;
        let mut issues = Vec::new();

        for (index, reference) in references.iter().take(self.sample_size).enumerate() {
            let query = truncate_chars(reference, MAX_QUERY_CHARS);

            match self.lookup.lookup(query).await {
                Ok(Some(work)) => {
                    verified_count += 1;
                    if work.relevance < LOW_CONFIDENCE_RELEVANCE {
                        issues.push(citation_issue(
                            index,
                            reference,
                            "Low confidence match",
                            Severity::Low,
                        ));
                    }
                }
                Ok(None) => {
                    broken_count += 1;
                    issues.push(citation_issue(
                        index,
                        reference,
                        "Citation not found in Crossref database",
                        Severity::High,
                    ));
                }
                Err(e) => {
                    tracing::debug!(
                        source = self.lookup.name(),
                        error = %e,
                        "lookup failed, counting citation as broken"
                    );
                    broken_count += 1;
                    issues.push(citation_issue(
                        index,
                        reference,
                        "Citation not found in Crossref database",
                        Severity::High,
                    ));
                }
            }

            tokio::time::sleep(self.courtesy_delay).await;
        }

        // Scale the sampled verified/broken rates onto the unchecked
        // remainder, in integer arithmetic.
        let sampled = verified_count + broken_count;
        if total_checked > sampled && sampled > 0 {
            let remaining = total_checked - sampled;
            verified_count += remaining * verified_count / sampled;
            broken_count += remaining * broken_count / sampled;
        }

        let score = (verified_count as f64 / total_checked.max(1) as f64 * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8;

        CitationAnalysis {
            total_checked,
            verified_count,
            broken_count,
            score,
            issues,
        }
    }
}

fn citation_issue(index: usize, reference: &str, description: &str, severity: Severity) -> Issue {
    Issue {
        id: index + 1,
        category: Some("Citation".to_string()),
        excerpt: Some(truncate_chars(reference, EXCERPT_CHARS).to_string()),
        description: description.to_string(),
        severity,
    }
}
