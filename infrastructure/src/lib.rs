//! Infrastructure layer for note-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLoggingConfig, FileProvidersConfig};
pub use logging::{JsonlRunLogger, research_completed_event};
pub use providers::{AnthropicGateway, OpenAiGateway};
