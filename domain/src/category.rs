//! Topic categories for single-pass research.
//!
//! Orthogonal to [`Domain`](crate::core::domain::Domain): domains route
//! questions to specialist agents, categories pick the prompt flavor for
//! the simpler single-pass path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic category of a note, used to select single-pass prompt templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Software,
    Ai,
    Building,
    Lifestyle,
    Productivity,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Software => "software",
            Category::Ai => "ai",
            Category::Building => "building",
            Category::Lifestyle => "lifestyle",
            Category::Productivity => "productivity",
            Category::General => "general",
        }
    }

    /// All categories with keyword tables (everything except General)
    fn keyed() -> [Category; 5] {
        [
            Category::Software,
            Category::Ai,
            Category::Building,
            Category::Lifestyle,
            Category::Productivity,
        ]
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Software => &[
                "python",
                "javascript",
                "api",
                "framework",
                "code",
                "programming",
                "database",
                "backend",
                "frontend",
                "deploy",
                "github",
                "repository",
            ],
            Category::Ai => &[
                "ai",
                "ml",
                "machine learning",
                "llm",
                "neural",
                "gpt",
                "claude",
                "deep learning",
                "nlp",
                "computer vision",
            ],
            Category::Building => &[
                "build",
                "construction",
                "materials",
                "diy",
                "deck",
                "renovation",
                "repair",
                "tools",
                "blueprint",
            ],
            Category::Lifestyle => &[
                "date",
                "restaurant",
                "activity",
                "weekend",
                "event",
                "entertainment",
                "travel",
                "food",
                "hobby",
            ],
            Category::Productivity => &[
                "productivity",
                "workflow",
                "efficiency",
                "todo",
                "task",
                "organize",
                "schedule",
                "time management",
                "focus",
            ],
            Category::General => &[],
        }
    }

    /// Detect the category of a note by keyword count. Highest count wins;
    /// zero matches falls back to `General`.
    pub fn detect(text: &str) -> Category {
        let lower = text.to_lowercase();

        let mut best = Category::General;
        let mut best_score = 0usize;

        for category in Category::keyed() {
            let score = category
                .keywords()
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();
            if score > best_score {
                best = category;
                best_score = score;
            }
        }

        best
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "software" => Category::Software,
            "ai" => Category::Ai,
            "building" => Category::Building,
            "lifestyle" => Category::Lifestyle,
            "productivity" => Category::Productivity,
            _ => Category::General,
        })
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("category parsing is infallible"))
    }
}
