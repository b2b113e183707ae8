//! Orchestration value objects

pub mod value_objects;

pub use value_objects::{
    ExtractionStage, OrchestrationResult, Phase, ProviderReport, ResearchMode, ResearchOutcome,
    SynthesisOutcome,
};
