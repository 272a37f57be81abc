//! Novelty scoring.
//!
//! A real implementation would embed the manuscript and search a corpus
//! for near-duplicates. Until that lands, [`PlaceholderNovelty`] draws a
//! score from a plausible band and reports a fixed set of similar works
//! so downstream consumers exercise the full report shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarWork {
    pub title: String,
    pub year: i32,
    /// Rendered percentage, e.g. `"85%"`.
    pub similarity: String,
}

impl SimilarWork {
    pub fn new(title: &str, year: i32, similarity: &str) -> Self {
        Self {
            title: title.to_string(),
            year,
            similarity: similarity.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyAnalysis {
    pub score: u8,
    pub similar_works: Vec<SimilarWork>,
}

/// Strategy seam for novelty scoring.
pub trait NoveltyScorer: Send + Sync {
    fn score(&self, text: &str) -> NoveltyAnalysis;
}

/// Draws a score uniformly from 60-90 and lists two canned similar works.
#[derive(Debug, Default)]
pub struct PlaceholderNovelty;

impl NoveltyScorer for PlaceholderNovelty {
    fn score(&self, _text: &str) -> NoveltyAnalysis {
        NoveltyAnalysis {
            score: fastrand::u8(60..=90),
            similar_works: vec![
                SimilarWork::new("Deep Learning for Research Audits", 2022, "85%"),
                SimilarWork::new("Automated Peer Review Systems", 2021, "72%"),
            ],
        }
    }
}

/// Always returns the same score with no similar works. Meant for tests
/// that need deterministic aggregate numbers.
#[derive(Debug)]
pub struct FixedNovelty {
    pub score: u8,
}

impl FixedNovelty {
    pub fn new(score: u8) -> Self {
        Self { score }
    }
}

impl NoveltyScorer for FixedNovelty {
    fn score(&self, _text: &str) -> NoveltyAnalysis {
        NoveltyAnalysis {
            score: self.score,
            similar_works: Vec::new(),
        }
    }
}
