//! Application layer for note-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::ResearchParams;
pub use ports::{
    chat_gateway::{ChatGateway, ChatRequest, Completion, GatewayError, GatewaySet, estimate_cost_units},
    progress::{NoProgress, ProgressNotifier},
    run_logger::{NoRunLogger, RunEvent, RunLogger},
};
pub use use_cases::extract_questions::{ExtractQuestionsUseCase, ExtractedQuestions};
pub use use_cases::orchestrate::OrchestrateUseCase;
pub use use_cases::research::ResearchEngine;
pub use use_cases::run_agent::RunAgentUseCase;
pub use use_cases::synthesize::SynthesizeUseCase;
