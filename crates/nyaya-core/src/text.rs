//! Small text helpers shared by the scorer and the inference modules.

/// Marker appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Prefix of `s` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, never splitting a multi-byte character.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `s` cut to `max_chars` characters with [`ELLIPSIS`] appended, or `s`
/// unchanged if it already fits.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    let prefix = prefix_chars(s, max_chars);
    if prefix.len() == s.len() {
        s.to_string()
    } else {
        format!("{prefix}{ELLIPSIS}")
    }
}

/// Round a relevance score to two decimals for reporting.
pub fn round_score(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

/// True if `haystack` contains any of `needles`.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// True if `haystack` contains every one of `needles`.
pub fn contains_all(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().all(|n| haystack.contains(n))
}
