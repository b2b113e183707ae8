//! Research question value object

use crate::core::domain::Domain;
use serde::{Deserialize, Serialize};

/// A research question extracted from a note (Value Object)
///
/// Created once by question extraction and immutable afterwards; consumed
/// by exactly the agents matching its domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchQuestion {
    /// The question itself
    pub text: String,
    /// Which agent roster entry this routes to
    pub domain: Domain,
    /// Priority 1-5, 5 being most critical to the note's goals
    pub priority: u8,
    /// Additional context that would help research
    pub context: String,
    /// Whether the answer should feed cross-domain synthesis
    pub requires_synthesis: bool,
}

impl ResearchQuestion {
    /// Create a question with the given text and domain; priority is
    /// clamped into 1..=5.
    pub fn new(text: impl Into<String>, domain: Domain, priority: u8) -> Self {
        Self {
            text: text.into(),
            domain,
            priority: priority.clamp(1, 5),
            context: String::new(),
            requires_synthesis: true,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_requires_synthesis(mut self, requires_synthesis: bool) -> Self {
        self.requires_synthesis = requires_synthesis;
        self
    }
}

impl std::fmt::Display for ResearchQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.text, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = ResearchQuestion::new("What is their compliance status?", Domain::Security, 4);
        assert_eq!(q.text, "What is their compliance status?");
        assert_eq!(q.domain, Domain::Security);
        assert_eq!(q.priority, 4);
        assert!(q.requires_synthesis);
    }

    #[test]
    fn test_priority_clamped() {
        assert_eq!(ResearchQuestion::new("q", Domain::General, 0).priority, 1);
        assert_eq!(ResearchQuestion::new("q", Domain::General, 9).priority, 5);
    }

    #[test]
    fn test_builders() {
        let q = ResearchQuestion::new("q", Domain::Business, 3)
            .with_context("Meeting prep")
            .with_requires_synthesis(false);
        assert_eq!(q.context, "Meeting prep");
        assert!(!q.requires_synthesis);
    }
}
