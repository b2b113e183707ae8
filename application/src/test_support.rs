//! Scripted gateway mocks shared by the use case tests

use crate::ports::chat_gateway::{ChatGateway, ChatRequest, Completion, GatewayError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays a scripted sequence of results and records every
/// request it receives.
pub struct ScriptedGateway {
    provider: String,
    script: Mutex<VecDeque<Result<Completion, GatewayError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedGateway {
    pub fn new(
        provider: impl Into<String>,
        script: Vec<Result<Completion, GatewayError>>,
    ) -> Self {
        Self {
            provider: provider.into(),
            script: Mutex::new(VecDeque::from(script)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Gateway answering every request with the given texts, in order.
    pub fn ok(provider: impl Into<String>, texts: &[&str]) -> Self {
        Self::new(
            provider,
            texts
                .iter()
                .map(|text| {
                    Ok(Completion {
                        text: text.to_string(),
                        cost_units: 10,
                    })
                })
                .collect(),
        )
    }

    /// Gateway failing every request with a connection error.
    pub fn failing(provider: impl Into<String>, calls: usize) -> Self {
        Self::new(
            provider,
            (0..calls)
                .map(|_| Err(GatewayError::ConnectionError("connection refused".to_string())))
                .collect(),
        )
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn complete(&self, request: ChatRequest) -> Result<Completion, GatewayError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}
