//! Methodology heuristics.
//!
//! Deduction scoring over the raw text: every document starts at 85 and
//! loses points for small sample sizes, missing control groups, and
//! uncorrected multiple comparisons. The rules are shallow keyword and
//! regex checks, tuned for recall over precision.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Issue, Severity};

const BASELINE_SCORE: i32 = 85;
const SMALL_SAMPLE_THRESHOLD: u64 = 30;
const P_VALUE_REPORT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologyAnalysis {
    pub score: u8,
    pub issues: Vec<Issue>,
}

pub fn analyze(text: &str) -> MethodologyAnalysis {
    static SAMPLE_SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"n\s*=\s*(\d+)").unwrap());
    static P_VALUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"p\s*[<>=]\s*0\.0\d+").unwrap());

    let lower = text.to_lowercase();
    let mut score = BASELINE_SCORE;
    let mut issues = Vec::new();

    if lower.contains("sample size") || lower.contains("n=") {
        if let Some(caps) = SAMPLE_SIZE_RE.captures(&lower)
            && let Ok(n) = caps[1].parse::<u64>()
            && n < SMALL_SAMPLE_THRESHOLD
        {
            issues.push(Issue {
                id: issues.len() + 1,
                category: Some("Sample Size".to_string()),
                excerpt: None,
                description: format!(
                    "Sample size of N={} might be too small for statistical significance.",
                    n
                ),
                severity: Severity::High,
            });
            score -= 15;
        }
    }

    if !lower.contains("control group") && lower.contains("experiment") {
        issues.push(Issue {
            id: issues.len() + 1,
            category: Some("Control Group".to_string()),
            excerpt: None,
            description: "No explicit control group mentioned.".to_string(),
            severity: Severity::Medium,
        });
        score -= 10;
    }

    // The substring gate means bare "p<0.05" notation without a spaced
    // "p <" or the word "p-value" is not counted.
    if lower.contains("p-value") || lower.contains("p <") {
        let reported = P_VALUE_RE.find_iter(&lower).count();
        if reported > P_VALUE_REPORT_LIMIT {
            issues.push(Issue {
                id: issues.len() + 1,
                category: Some("Statistical Testing".to_string()),
                excerpt: None,
                description:
                    "Multiple p-values reported. Ensure proper correction for multiple comparisons."
                        .to_string(),
                severity: Severity::Medium,
            });
            score -= 5;
        }
    }

    MethodologyAnalysis {
        score: score.max(0) as u8,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── sample size rule ─────────────────────────────────────────────

    #[test]
    fn test_small_sample_deducts_fifteen() {
        let analysis = analyze("Our sample size was modest, with n=15 participants.");
        assert_eq!(analysis.score, 70);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(
            analysis.issues[0].description,
            "Sample size of N=15 might be too small for statistical significance."
        );
        assert_eq!(analysis.issues[0].severity, Severity::High);
        assert_eq!(analysis.issues[0].category.as_deref(), Some("Sample Size"));
    }

    #[test]
    fn test_large_sample_keeps_baseline() {
        let analysis = analyze("The sample size was n=240 across three sites.");
        assert_eq!(analysis.score, 85);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn test_sample_mention_without_value() {
        let analysis = analyze("The sample size will be determined later.");
        assert_eq!(analysis.score, 85);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn test_spaced_n_without_gate_keyword_ignored() {
        // "n = 12" matches the extraction pattern, but neither gate keyword
        // ("sample size" / "n=") appears, so the rule never runs.
        let analysis = analyze("We recruited n = 12 people for the pilot.");
        assert_eq!(analysis.score, 85);
        assert!(analysis.issues.is_empty());
    }

    // ── control group rule ───────────────────────────────────────────

    #[test]
    fn test_experiment_without_control_group() {
        let analysis = analyze("The experiment ran for six weeks.");
        assert_eq!(analysis.score, 75);
        assert_eq!(analysis.issues[0].description, "No explicit control group mentioned.");
        assert_eq!(analysis.issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_experiment_with_control_group() {
        let analysis = analyze("The experiment compared against a control group of equal size.");
        assert_eq!(analysis.score, 85);
        assert!(analysis.issues.is_empty());
    }

    // ── statistics rule ──────────────────────────────────────────────

    #[test]
    fn test_many_p_values_deduct_five() {
        let text = "We observed p < 0.05, p < 0.04, p < 0.03, p < 0.02, p < 0.01, and p < 0.001 across conditions.";
        let analysis = analyze(text);
        assert_eq!(analysis.score, 80);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].category.as_deref(), Some("Statistical Testing"));
    }

    #[test]
    fn test_few_p_values_ignored() {
        let analysis = analyze("The effect was significant, p < 0.05, p < 0.01.");
        assert_eq!(analysis.score, 85);
    }

    #[test]
    fn test_unspaced_p_values_not_counted() {
        // Six regex hits but no "p-value" or spaced "p <" gate.
        let text = "p<0.05 p<0.04 p<0.03 p<0.02 p<0.01 p<0.001";
        let analysis = analyze(text);
        assert_eq!(analysis.score, 85);
    }

    // ── combinations ─────────────────────────────────────────────────

    #[test]
    fn test_all_rules_stack() {
        let text = "In this experiment the sample size was n=10. \
            Results: p-value p < 0.05, p < 0.04, p < 0.03, p < 0.02, p < 0.01, p < 0.009.";
        let analysis = analyze(text);
        assert_eq!(analysis.score, 85 - 15 - 10 - 5);
        assert_eq!(analysis.issues.len(), 3);
        assert_eq!(analysis.issues[2].id, 3);
    }

    #[test]
    fn test_plain_text_keeps_baseline() {
        let analysis = analyze("A literature survey of recent advances.");
        assert_eq!(analysis.score, 85);
        assert!(analysis.issues.is_empty());
    }
}
