//! Chat gateway port
//!
//! Defines the interface for communicating with model providers.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One chat completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Optional system instruction
    pub system: Option<String>,
    /// The user prompt
    pub prompt: String,
    /// Completion token budget
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens,
            temperature,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A finished completion with its cost
#[derive(Debug, Clone)]
pub struct Completion {
    /// Response text
    pub text: String,
    /// Tokens consumed, from provider usage when reported, otherwise the
    /// whitespace estimate
    pub cost_units: u32,
}

/// Gateway for model communication
///
/// This port defines how the application layer talks to model providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Provider label used in logs and single-pass provider reports
    fn provider(&self) -> &str;

    /// Send one request and wait for the full completion
    async fn complete(&self, request: ChatRequest) -> Result<Completion, GatewayError>;
}

/// The three gateway roles the research flow draws on.
///
/// `analysis` handles extraction, synthesis, and merging; `research`
/// handles agent and primary single-pass calls; `contrast` is the second
/// perspective on the single-pass path. Roles may share one adapter.
#[derive(Clone)]
pub struct GatewaySet {
    pub analysis: Arc<dyn ChatGateway>,
    pub research: Arc<dyn ChatGateway>,
    pub contrast: Arc<dyn ChatGateway>,
}

impl GatewaySet {
    pub fn new(
        analysis: Arc<dyn ChatGateway>,
        research: Arc<dyn ChatGateway>,
        contrast: Arc<dyn ChatGateway>,
    ) -> Self {
        Self {
            analysis,
            research,
            contrast,
        }
    }
}

/// Whitespace-token cost estimate for providers that report no usage.
pub fn estimate_cost_units(prompt: &str, completion: &str) -> u32 {
    (prompt.split_whitespace().count() + completion.split_whitespace().count()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("prompt", 800, 0.7).with_system("persona");
        assert_eq!(request.system.as_deref(), Some("persona"));
        assert_eq!(request.max_tokens, 800);
    }

    #[test]
    fn test_estimate_cost_units() {
        assert_eq!(estimate_cost_units("one two three", "four five"), 5);
        assert_eq!(estimate_cost_units("", ""), 0);
    }
}
