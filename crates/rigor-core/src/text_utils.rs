//! Small text helpers shared across analyzers.

/// Truncate to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Snap a byte index down to the nearest char boundary.
pub fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Slice a context window of `pad` bytes around `[start, end)`, snapped to
/// char boundaries and clamped to the text.
pub fn context_window(s: &str, start: usize, end: usize, pad: usize) -> &str {
    let from = floor_char_boundary(s, start.saturating_sub(pad));
    let to = floor_char_boundary(s, end.saturating_add(pad).min(s.len()));
    &s[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("hi", 5), "hi");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each 'é' is two bytes; truncation must count chars, not bytes.
        let s = "éééé";
        assert_eq!(truncate_chars(s, 2), "éé");
    }

    #[test]
    fn test_context_window_clamps() {
        let s = "abcdefghij";
        assert_eq!(context_window(s, 4, 6, 2), "cdefgh");
        assert_eq!(context_window(s, 0, 2, 50), s);
    }

    #[test]
    fn test_context_window_snaps_to_boundary() {
        let s = "aé bé cé";
        // Byte 2 and byte 6 both land inside a two-byte 'é'.
        let w = context_window(s, 2, 6, 0);
        assert_eq!(w, "é b");
    }
}
