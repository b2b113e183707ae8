//! Anthropic messages API adapter

use async_trait::async_trait;
use scout_application::{ChatGateway, ChatRequest, Completion, GatewayError, estimate_cost_units};
use serde::{Deserialize, Serialize};
use tracing::debug;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// [`ChatGateway`] adapter for the Anthropic messages API
pub struct AnthropicGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicGateway {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[async_trait]
impl ChatGateway for AnthropicGateway {
    fn provider(&self) -> &str {
        "claude"
    }

    async fn complete(&self, request: ChatRequest) -> Result<Completion, GatewayError> {
        let body = MessagesBody {
            model: &self.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: request.system.as_deref(),
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
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

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| GatewayError::MalformedResponse("empty content array".to_string()))?;

        let cost_units = match parsed.usage {
            Some(usage) => usage.input_tokens + usage.output_tokens,
            None => estimate_cost_units(&request.prompt, &text),
        };
        debug!("anthropic completion: {} cost units", cost_units);

        Ok(Completion { text, cost_units })
    }
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}
