//! Heuristic reference extraction.
//!
//! Papers arrive as plain extracted text with no reliable structure, so
//! references are pulled with layered patterns rather than a real
//! bibliography parser: bracketed numeric entries first, then a
//! References/Bibliography section block, then inline author-year mentions
//! as a fallback when the first two find nothing. False positives are
//! expected; the citation verifier absorbs them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hard cap on extracted references.
pub const MAX_REFERENCES: usize = 50;

/// Extract citation-like strings from document text.
///
/// Matches are returned in pattern order (all bracketed entries, then all
/// section blocks), each in positional order, capped at [`MAX_REFERENCES`].
pub fn extract_references(text: &str) -> Vec<String> {
    static BRACKETED_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\[\d+\]\s*([A-Z][^.]+\.\s*\d{4})").unwrap());
    static SECTION_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"References|REFERENCES|Bibliography").unwrap());
    static AUTHOR_YEAR_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[A-Z][a-z]+(?:\s+et\s+al\.?)?\s*\(\d{4}\)").unwrap());

    let mut references: Vec<String> = Vec::new();

    for caps in BRACKETED_RE.captures_iter(text) {
        references.push(caps[1].to_string());
    }

    // A section block runs from the heading to the next blank line or the
    // end of text. The manual boundary scan stands in for a lookahead,
    // which the regex engine does not support. Headings inside an already
    // captured block are skipped.
    let mut last_end = 0usize;
    for m in SECTION_RE.find_iter(text) {
        if m.start() < last_end {
            continue;
        }
        let rest = &text[m.end()..];
        let block_end = rest.find("\n\n").unwrap_or(rest.len());
        let block = &rest[..block_end];
        last_end = m.end() + block_end;
        if !block.trim().is_empty() {
            references.push(block.to_string());
        }
    }

    if references.is_empty() {
        for m in AUTHOR_YEAR_RE.find_iter(text) {
            references.push(m.as_str().to_string());
        }
    }

    references.truncate(MAX_REFERENCES);
    references
}
