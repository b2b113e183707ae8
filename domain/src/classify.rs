//! Keyword-based domain classification.
//!
//! A cheap, deterministic pre-filter used both standalone and as the
//! fallback classifier when model-backed extraction is unavailable. Pure
//! text analysis — no I/O, no model calls.

use crate::core::domain::Domain;

/// Keyword phrases that signal each specialist domain. Matching is
/// case-insensitive substring containment.
pub fn keywords(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Security => &[
            "security",
            "compliance",
            "risk",
            "vulnerability",
            "audit",
            "governance",
            "privacy",
            "data protection",
            "cybersecurity",
            "threat",
            "incident",
            "regulations",
            "standards",
            "certification",
            "encryption",
            "authentication",
        ],
        Domain::Technical => &[
            "github",
            "open source",
            "infrastructure",
            "api",
            "integration",
            "platform",
            "architecture",
            "deployment",
            "devops",
            "cloud",
            "microservices",
            "dashboards",
            "parsers",
            "alerts",
            "searches",
            "forge",
            "repository",
        ],
        Domain::Business => &[
            "10k",
            "10-k",
            "financial",
            "revenue",
            "earnings",
            "quarterly",
            "annual",
            "ceo letter",
            "investor",
            "shareholder",
            "market",
            "competition",
            "strategy",
            "growth",
            "profitability",
            "valuation",
            "performance",
            "outlook",
        ],
        Domain::Partnership => &[
            "partnership",
            "collaboration",
            "alliance",
            "joint venture",
            "customer",
            "client",
            "vendor",
            "supplier",
            "integration",
            "relationship",
            "meeting",
            "sales",
            "opportunity",
            "proposal",
            "negotiation",
            "contract",
        ],
        Domain::General => &[],
    }
}

/// Classify text into a research domain by keyword count.
///
/// The domain with the strict maximum count wins. Zero matches or a tie
/// falls back to `Business`, the most common note category in this
/// system's usage.
pub fn classify(text: &str) -> Domain {
    let lower = text.to_lowercase();

    let mut best = Domain::Business;
    let mut best_score = 0usize;
    let mut tied = false;

    for domain in Domain::specialists() {
        let score = keywords(domain)
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count();
        if score > best_score {
            best = domain;
            best_score = score;
            tied = false;
        } else if score == best_score && score > 0 {
            tied = true;
        }
    }

    if best_score == 0 || tied {
        Domain::Business
    } else {
        best
    }
}
