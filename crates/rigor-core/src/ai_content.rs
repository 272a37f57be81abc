//! AI-generated-content estimation.
//!
//! Counts stylistic indicators and maps them onto a 0-100 probability.
//! Three indicator families are implemented: formal filler phrases,
//! suspiciously uniform sentence lengths, and a shortage of personal
//! pronouns in long texts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Denominator for the probability calculation. Three indicator families
/// are implemented; the scale stays at ten so scores keep headroom for
/// further signals.
const INDICATOR_SCALE: u32 = 10;

/// Phrases over-represented in generated prose. Each one present counts
/// once, regardless of how often it repeats.
const FORMAL_PHRASES: [&str; 5] = [
    "it is important to note",
    "in conclusion",
    "furthermore",
    "moreover",
    "delve into",
];

const MIN_SENTENCES_FOR_UNIFORMITY: usize = 10;
const PRONOUN_SCARCITY_LIMIT: usize = 5;
const PRONOUN_CHECK_MIN_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiContentAnalysis {
    /// Estimated probability (0-100) that the text is machine-generated.
    pub probability: u8,
    pub sections_flagged: Vec<String>,
}

pub fn estimate(text: &str) -> AiContentAnalysis {
    static PRONOUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(i|we|our|my)\b").unwrap());

    let lower = text.to_lowercase();
    let mut indicators: u32 = 0;
    let mut sections_flagged = Vec::new();

    for phrase in FORMAL_PHRASES {
        if lower.contains(phrase) {
            indicators += 1;
        }
    }

    let sentences: Vec<&str> = text.split('.').collect();
    if sentences.len() > MIN_SENTENCES_FOR_UNIFORMITY {
        let total_words: usize = sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        let avg_len = total_words as f64 / sentences.len() as f64;
        if avg_len > 15.0 && avg_len < 25.0 {
            indicators += 1;
        }
    }

    let pronouns = PRONOUN_RE.find_iter(text).count();
    if pronouns < PRONOUN_SCARCITY_LIMIT && text.chars().count() > PRONOUN_CHECK_MIN_CHARS {
        indicators += 1;
        sections_flagged.push("Introduction".to_string());
    }

    let probability = (indicators * 100 / INDICATOR_SCALE) as u8;
    if probability > 50 {
        sections_flagged.push("Abstract".to_string());
        sections_flagged.push("Conclusion".to_string());
    }

    AiContentAnalysis {
        probability,
        sections_flagged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── individual indicators ────────────────────────────────────────

    #[test]
    fn test_clean_short_text_scores_zero() {
        let analysis = estimate("I measured the reaction in our lab. My notes follow.");
        assert_eq!(analysis.probability, 0);
        assert!(analysis.sections_flagged.is_empty());
    }

    #[test]
    fn test_each_filler_phrase_counts_once() {
        let text = "Furthermore, the results hold. Furthermore, they generalize. Moreover, we delve into details.";
        let analysis = estimate(text);
        // "furthermore" (once, despite repeats), "moreover", "delve into".
        assert_eq!(analysis.probability, 30);
    }

    #[test]
    fn test_uniform_sentence_length_indicator() {
        // Twelve sentences of exactly 18 words each. "we" keeps the
        // pronoun count high enough that only uniformity fires.
        let sentence = "here we present one sentence containing exactly eighteen carefully \
            counted words to exercise the average sentence length check";
        let text = vec![sentence; 12].join(". ");
        let analysis = estimate(&text);
        assert_eq!(analysis.probability, 10);
    }

    #[test]
    fn test_pronoun_scarcity_flags_introduction() {
        let text = "The system was evaluated on benchmarks. ".repeat(40);
        assert!(text.chars().count() > 1000);
        let analysis = estimate(&text);
        assert_eq!(analysis.probability, 10);
        assert_eq!(analysis.sections_flagged, vec!["Introduction"]);
    }

    #[test]
    fn test_pronouns_suppress_scarcity_indicator() {
        let text = "We ran it and our team and my colleagues and I agreed. ".repeat(30);
        let analysis = estimate(&text);
        assert_eq!(analysis.probability, 0);
        assert!(analysis.sections_flagged.is_empty());
    }

    // ── aggregate behavior ───────────────────────────────────────────

    #[test]
    fn test_high_probability_flags_abstract_and_conclusion() {
        // Five filler phrases plus pronoun scarcity in a long text: 60.
        let filler = "It is important to note the trend. In conclusion the effect holds. \
            Furthermore it scales. Moreover it transfers. The analysis will delve into causes. ";
        let text = format!("{}{}", filler, "The benchmark suite was rerun for validation. ".repeat(30));
        let analysis = estimate(&text);
        assert_eq!(analysis.probability, 60);
        assert_eq!(
            analysis.sections_flagged,
            vec!["Introduction", "Abstract", "Conclusion"]
        );
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let text = "Furthermore, the pipeline is stable. In conclusion, results repeat.";
        assert_eq!(estimate(text), estimate(text));
    }
}
