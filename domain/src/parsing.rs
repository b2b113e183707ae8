//! Best-effort parsing of model output.
//!
//! Model responses are not contract-guaranteed, so every function here
//! treats a missing section or malformed payload as a normal, empty-result
//! case. All pure text analysis — no I/O, no session state.

use crate::classify;
use crate::core::domain::Domain;
use crate::core::question::ResearchQuestion;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum entries retained from a bulleted section
pub const MAX_LIST_ITEMS: usize = 10;

/// Matches per question pattern retained during fallback extraction
const MAX_MATCHES_PER_PATTERN: usize = 3;

/// Errors from structured question-payload parsing
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("no JSON array found in response")]
    NoArray,

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Question record as the extraction model is asked to emit it. Every
/// field except `text` is defaulted, since the model may omit them.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    text: String,
    #[serde(default = "default_domain")]
    domain: String,
    #[serde(default = "default_priority")]
    priority: i64,
    #[serde(default)]
    context: String,
    #[serde(default = "default_requires_synthesis")]
    requires_synthesis: bool,
}

fn default_domain() -> String {
    "general".to_string()
}

fn default_priority() -> i64 {
    3
}

fn default_requires_synthesis() -> bool {
    true
}

/// Parse a JSON question array out of a model response.
///
/// Slices from the first `[` to the last `]` to tolerate surrounding
/// prose, then parses strictly. Records with an empty `text` field are
/// discarded.
pub fn parse_question_payload(response: &str) -> Result<Vec<ResearchQuestion>, PayloadError> {
    let start = response.find('[').ok_or(PayloadError::NoArray)?;
    let end = response.rfind(']').ok_or(PayloadError::NoArray)?;
    if end <= start {
        return Err(PayloadError::NoArray);
    }

    let raw: Vec<RawQuestion> = serde_json::from_str(&response[start..=end])?;

    Ok(raw
        .into_iter()
        .filter(|q| !q.text.trim().is_empty())
        .map(|q| {
            let domain: Domain = q.domain.parse().expect("domain parsing is infallible");
            let priority = q.priority.clamp(1, 5) as u8;
            ResearchQuestion::new(q.text, domain, priority)
                .with_context(q.context)
                .with_requires_synthesis(q.requires_synthesis)
        })
        .collect())
}

static QUESTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"what (is|are|do|does|can).*?\?",
        r"how (do|does|can|should).*?\?",
        r"which.*?\?",
        r"where.*?\?",
        r"when.*?\?",
        r"why.*?\?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("question pattern is valid"))
    .collect()
});

/// Heuristic question extraction for when the model path is unavailable.
///
/// Applies the fixed question patterns to the lowercased text, capping
/// three matches per pattern, and classifies each match by keyword. If
/// nothing matches, emits exactly one synthetic catch-all question so the
/// result is never empty. Pure and infallible.
pub fn fallback_questions(note_text: &str) -> Vec<ResearchQuestion> {
    let lower = note_text.to_lowercase();
    let mut questions = Vec::new();

    for pattern in QUESTION_PATTERNS.iter() {
        for m in pattern.find_iter(&lower).take(MAX_MATCHES_PER_PATTERN) {
            let text = m.as_str();
            questions.push(
                ResearchQuestion::new(text, classify::classify(text), 3)
                    .with_context("Extracted from note content"),
            );
        }
    }

    if questions.is_empty() {
        questions.push(
            ResearchQuestion::new(
                "Research the topics mentioned in the note",
                classify::classify(note_text),
                3,
            )
            .with_context("General research needed")
            .with_requires_synthesis(false),
        );
    }

    questions
}

/// Extract the content between two section headers.
///
/// The slice starts after `start_marker` and runs to `end_marker`, or to
/// end-of-text when `end_marker` is `None` or absent. A missing start
/// marker yields an empty string, not an error.
pub fn extract_section(content: &str, start_marker: &str, end_marker: Option<&str>) -> String {
    let Some(start) = content.find(start_marker) else {
        return String::new();
    };
    let body = &content[start + start_marker.len()..];

    match end_marker.and_then(|m| body.find(m)) {
        Some(end) => body[..end].trim().to_string(),
        None => body.trim().to_string(),
    }
}

static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-\*0-9\.\)\s]+").expect("bullet prefix pattern is valid"));

/// Convert loosely bulleted text into an ordered list.
///
/// Lines starting with a bullet glyph, dash, asterisk, or digit are kept
/// with the bullet syntax stripped; blank and non-bulleted lines are
/// skipped. Capped at [`MAX_LIST_ITEMS`] entries.
pub fn bullet_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let is_bullet = line.starts_with('•')
            || line.starts_with('-')
            || line.starts_with('*')
            || line.chars().next().is_some_and(|c| c.is_ascii_digit());
        if line.is_empty() || !is_bullet {
            continue;
        }

        let clean = BULLET_PREFIX.replace(line, "").trim().to_string();
        if !clean.is_empty() {
            items.push(clean);
        }
        if items.len() == MAX_LIST_ITEMS {
            break;
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_question_payload Tests ====================

    #[test]
    fn test_parse_payload_with_surrounding_prose() {
        let response = r#"Here are the questions I found:
[
    {"text": "What is their security posture?", "domain": "security", "priority": 4,
     "context": "Meeting prep", "requires_synthesis": true},
    {"text": "How do they use GitHub?", "domain": "technical", "priority": 3}
]
Let me know if you need more."#;

        let questions = parse_question_payload(response).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].domain, Domain::Security);
        assert_eq!(questions[0].priority, 4);
        assert_eq!(questions[1].domain, Domain::Technical);
        assert!(questions[1].requires_synthesis);
    }

    #[test]
    fn test_parse_payload_discards_empty_text() {
        let response = r#"[{"text": "", "domain": "security"}, {"text": "real question"}]"#;
        let questions = parse_question_payload(response).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "real question");
        assert_eq!(questions[0].domain, Domain::General);
    }

    #[test]
    fn test_parse_payload_no_array() {
        assert!(matches!(
            parse_question_payload("no json here"),
            Err(PayloadError::NoArray)
        ));
    }

    #[test]
    fn test_parse_payload_malformed_json() {
        assert!(matches!(
            parse_question_payload("[{not valid]"),
            Err(PayloadError::Json(_))
        ));
    }

    #[test]
    fn test_parse_payload_clamps_priority_and_unknown_domain() {
        let response = r#"[{"text": "q", "domain": "finance", "priority": 99}]"#;
        let questions = parse_question_payload(response).unwrap();
        assert_eq!(questions[0].domain, Domain::General);
        assert_eq!(questions[0].priority, 5);
    }

    // ==================== fallback_questions Tests ====================

    #[test]
    fn test_fallback_finds_question_patterns() {
        let note = "What is their compliance status? How do they handle encryption?";
        let questions = fallback_questions(note);
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.domain == Domain::Security));
        assert!(questions.iter().all(|q| q.requires_synthesis));
    }

    #[test]
    fn test_fallback_caps_matches_per_pattern() {
        let note = "what is a? what is b? what is c? what is d? what is e?";
        let questions = fallback_questions(note);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_fallback_never_empty() {
        let questions = fallback_questions("Meeting notes without any questions.");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Research the topics mentioned in the note");
        assert!(!questions[0].requires_synthesis);
    }

    #[test]
    fn test_fallback_synthetic_question_classifies_full_text() {
        let questions = fallback_questions("Notes on their 10-K revenue outlook.");
        assert_eq!(questions[0].domain, Domain::Business);
    }

    // ==================== extract_section Tests ====================

    #[test]
    fn test_extract_section_between_markers() {
        let content = "FINDINGS:\nsome findings here\nKEY INSIGHTS:\n- one";
        let findings = extract_section(content, "FINDINGS:", Some("KEY INSIGHTS:"));
        assert_eq!(findings, "some findings here");
    }

    #[test]
    fn test_extract_section_to_end() {
        let content = "TALKING POINTS:\n- point one\n- point two";
        let section = extract_section(content, "TALKING POINTS:", None);
        assert_eq!(section, "- point one\n- point two");
    }

    #[test]
    fn test_extract_section_missing_marker_is_empty() {
        assert_eq!(extract_section("no sections", "FINDINGS:", None), "");
    }

    #[test]
    fn test_extract_section_missing_end_runs_to_eof() {
        let content = "FINDINGS:\neverything after";
        assert_eq!(
            extract_section(content, "FINDINGS:", Some("ABSENT:")),
            "everything after"
        );
    }

    #[test]
    fn test_extract_section_is_idempotent() {
        let content = "KEY INSIGHTS:\n- a\n- b\nRECOMMENDATIONS:\n- c";
        let first = extract_section(content, "KEY INSIGHTS:", Some("RECOMMENDATIONS:"));
        let second = extract_section(content, "KEY INSIGHTS:", Some("RECOMMENDATIONS:"));
        assert_eq!(first, second);
        assert_eq!(bullet_list(&first), bullet_list(&second));
    }

    // ==================== bullet_list Tests ====================

    #[test]
    fn test_bullet_list_strips_glyphs() {
        let text = "• first\n- second\n* third\n1. fourth\n2) fifth";
        let items = bullet_list(text);
        assert_eq!(items, vec!["first", "second", "third", "fourth", "fifth"]);
    }

    #[test]
    fn test_bullet_list_skips_blank_and_prose_lines() {
        let text = "Some intro prose\n\n- kept\nanother prose line\n- also kept";
        assert_eq!(bullet_list(text), vec!["kept", "also kept"]);
    }

    #[test]
    fn test_bullet_list_caps_at_ten_in_order() {
        let text = (1..=15)
            .map(|i| format!("- item {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let items = bullet_list(&text);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0], "item 1");
        assert_eq!(items[9], "item 10");
    }

    #[test]
    fn test_bullet_list_empty_input() {
        assert!(bullet_list("").is_empty());
    }
}
