//! Provider adapters implementing the chat gateway port

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicGateway;
pub use openai::OpenAiGateway;
