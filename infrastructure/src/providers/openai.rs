//! OpenAI chat completions API adapter

use super::anthropic::map_transport_error;
use async_trait::async_trait;
use scout_application::{ChatGateway, ChatRequest, Completion, GatewayError, estimate_cost_units};
use serde::{Deserialize, Serialize};
use tracing::debug;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// [`ChatGateway`] adapter for the OpenAI chat completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[async_trait]
impl ChatGateway for OpenAiGateway {
    fn provider(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ChatRequest) -> Result<Completion, GatewayError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatBody {
            model: &self.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages,
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "{}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("empty choices array".to_string()))?;

        let cost_units = match parsed.usage {
            Some(usage) => usage.total_tokens,
            None => estimate_cost_units(&request.prompt, &text),
        };
        debug!("openai completion: {} cost units", cost_units);

        Ok(Completion { text, cost_units })
    }
}
