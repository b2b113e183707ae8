//! Small text helpers shared across layers

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Char-boundary safe.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// First `max_chars` characters of a string with no ellipsis marker, used
/// where the original text length is part of the output contract.
pub fn excerpt(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
