//! Domain layer for note-scout
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Domains and agents
//!
//! Research questions are classified into a fixed set of domains
//! (security, technical, business, partnership, general), and each domain
//! maps to one entry in a static agent roster. Agents are configuration
//! records, not types: a single generic runner executes any profile.
//!
//! ## Research modes
//!
//! - **Multi-agent**: question extraction, concurrent specialist agents,
//!   and a synthesis pass, for complex multi-domain notes
//! - **Single-pass**: one category-flavored prompt to two providers with a
//!   perspective merge, for simple notes

pub mod agent;
pub mod category;
pub mod classify;
pub mod core;
pub mod orchestration;
pub mod parsing;
pub mod prompt;
pub mod routing;
pub mod util;

// Re-export commonly used types
pub use agent::{AgentProfile, AgentReport, DEFAULT_CONFIDENCE};
pub use category::Category;
pub use core::{domain::Domain, question::ResearchQuestion};
pub use orchestration::{
    ExtractionStage, OrchestrationResult, Phase, ProviderReport, ResearchMode, ResearchOutcome,
    SynthesisOutcome,
};
pub use parsing::{
    MAX_LIST_ITEMS, PayloadError, bullet_list, extract_section, fallback_questions,
    parse_question_payload,
};
pub use prompt::PromptTemplate;
pub use util::{excerpt, truncate_str};
