//! Writing-correction suggestions.
//!
//! Two sources feed the list: regex style checks over the extracted
//! text (passive voice, weak verbs, redundant phrases, informal
//! language) and the audit report's citation and methodology issues.
//! Style findings carry the matched span and surrounding context;
//! audit findings point at the relevant section instead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text_utils::context_window;
use crate::{Issue, Severity};

/// Characters of surrounding text captured on each side of a match.
const CONTEXT_PAD: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    PassiveVoice,
    WeakVerbs,
    Redundancy,
    InformalLanguage,
    CitationError,
    MethodologyIssue,
}

impl CorrectionKind {
    fn suggestion(self, found: &str) -> String {
        match self {
            CorrectionKind::PassiveVoice => format!(
                "Consider rewriting in active voice: '{found}' → Use a more direct construction"
            ),
            CorrectionKind::WeakVerbs => {
                format!("Replace '{found}' with a stronger, more specific verb")
            }
            CorrectionKind::Redundancy => {
                format!("Remove redundant phrase: '{found}' → Use simpler alternative")
            }
            CorrectionKind::InformalLanguage => {
                format!("Replace informal phrase '{found}' with more academic language")
            }
            CorrectionKind::CitationError => {
                "Verify citation format and completeness. Ensure all citations follow the \
                 required style guide (APA, MLA, Chicago, etc.)."
                    .to_string()
            }
            CorrectionKind::MethodologyIssue => {
                "Provide more detailed description of your research methods, including sample \
                 size, data collection procedures, and analysis techniques."
                    .to_string()
            }
        }
    }

    fn explanation(self) -> &'static str {
        match self {
            CorrectionKind::PassiveVoice => {
                "Active voice makes your writing clearer and more engaging"
            }
            CorrectionKind::WeakVerbs => "Strong verbs make your arguments more convincing",
            CorrectionKind::Redundancy => {
                "Concise writing is more professional and easier to read"
            }
            CorrectionKind::InformalLanguage => "Academic writing requires formal language",
            CorrectionKind::CitationError => {
                "Proper citations are crucial for academic integrity and giving credit to \
                 original authors."
            }
            CorrectionKind::MethodologyIssue => {
                "Clear methodology allows other researchers to replicate your study and \
                 validates your findings."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    #[serde(rename = "type")]
    pub kind: CorrectionKind,
    pub severity: Severity,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub issue: String,
    pub suggestion: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSummary {
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

/// Runs the style checks over `text`, then folds in corrections derived
/// from audit issues. Checks run pattern-major, so all findings of one
/// kind precede the next kind.
pub fn suggest_corrections(text: &str, issues: &[Issue]) -> Vec<Correction> {
    static PASSIVE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\b(is|are|was|were|been|being)\s+\w+ed\b").unwrap());
    static WEAK_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\b(is|are|was|were|seems|appears)\b").unwrap());
    static REDUNDANT_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b(very unique|completely finished|absolutely essential|past history)\b")
            .unwrap()
    });
    static INFORMAL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\b(a lot of|kind of|sort of|basically|actually)\b").unwrap());

    let style_checks: [(CorrectionKind, &Regex); 4] = [
        (CorrectionKind::PassiveVoice, &*PASSIVE_RE),
        (CorrectionKind::WeakVerbs, &*WEAK_RE),
        (CorrectionKind::Redundancy, &*REDUNDANT_RE),
        (CorrectionKind::InformalLanguage, &*INFORMAL_RE),
    ];

    let mut corrections = Vec::new();
    for (kind, re) in style_checks {
        for found in re.find_iter(text) {
            corrections.push(Correction {
                kind,
                severity: Severity::Medium,
                location: format!("Position {}-{}", found.start(), found.end()),
                context: Some(
                    context_window(text, found.start(), found.end(), CONTEXT_PAD)
                        .trim()
                        .to_string(),
                ),
                issue: found.as_str().to_string(),
                suggestion: kind.suggestion(found.as_str()),
                explanation: kind.explanation().to_string(),
            });
        }
    }

    for issue in issues {
        let category = issue.category.as_deref().unwrap_or("");
        if category.to_lowercase().contains("citation") {
            corrections.push(section_correction(
                CorrectionKind::CitationError,
                "Citations section",
                &issue.description,
            ));
        } else if matches!(
            category,
            "Sample Size" | "Control Group" | "Statistical Testing"
        ) {
            corrections.push(section_correction(
                CorrectionKind::MethodologyIssue,
                "Methodology section",
                &issue.description,
            ));
        }
    }

    corrections
}

fn section_correction(kind: CorrectionKind, location: &str, description: &str) -> Correction {
    Correction {
        kind,
        severity: Severity::High,
        location: location.to_string(),
        context: None,
        issue: description.to_string(),
        suggestion: kind.suggestion(""),
        explanation: kind.explanation().to_string(),
    }
}

pub fn summarize(corrections: &[Correction]) -> CorrectionSummary {
    let count = |severity: Severity| {
        corrections
            .iter()
            .filter(|c| c.severity == severity)
            .count()
    };
    CorrectionSummary {
        high_priority: count(Severity::High),
        medium_priority: count(Severity::Medium),
        low_priority: count(Severity::Low),
    }
}
