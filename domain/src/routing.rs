//! Research mode routing.
//!
//! All thresholds that decide between the multi-agent pipeline and the
//! cheaper single-pass path live here, so tuning the router never touches
//! the pipelines themselves.

/// Phrases that signal a note spans several research domains
pub const MULTI_DOMAIN_MARKERS: [&str; 16] = [
    "security leaders",
    "meeting with",
    "partnership",
    "collaboration",
    "provide customers",
    "trusted place",
    "10k",
    "ceo letter",
    "github forge",
    "open source initiative",
    "dashboards",
    "parsers",
    "business analysis",
    "financial analysis",
    "investor",
    "enterprise",
];

/// Marker matches at or above this count force the multi-agent path
const MARKER_THRESHOLD: usize = 3;

/// Notes longer than this are treated as substantial enough for agents
const SUBSTANTIAL_LENGTH: usize = 200;

/// Notes with fewer trimmed characters than this are skipped entirely
const TRIVIAL_LENGTH: usize = 10;

/// Whether a note is too short to research at all.
pub fn is_trivial(note_text: &str) -> bool {
    note_text.trim().chars().count() < TRIVIAL_LENGTH
}

/// Whether a note warrants the full multi-agent pipeline.
///
/// Any one of: three or more multi-domain markers, substantial length,
/// meeting preparation, or an explicit partnership/collaboration/enterprise
/// mention.
pub fn needs_multi_agent(note_text: &str) -> bool {
    let lower = note_text.to_lowercase();

    let marker_matches = MULTI_DOMAIN_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count();

    marker_matches >= MARKER_THRESHOLD
        || note_text.chars().count() > SUBSTANTIAL_LENGTH
        || lower.contains("meeting")
        || ["partnership", "collaboration", "enterprise"]
            .iter()
            .any(|indicator| lower.contains(indicator))
}
