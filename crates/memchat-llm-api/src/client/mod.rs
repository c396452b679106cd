use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use memchat_models::Message;

pub mod gemini;
pub mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAiCompatClient;

/// LLM client trait - unified interface for all providers
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Submit an ordered prompt and return the generated reply
    async fn chat(&self, messages: Vec<Message>) -> Result<LlmResponse>;

    /// Model identifier this client sends requests for
    fn model_name(&self) -> String;

    /// Simple completion returning only the reply text
    async fn chat_completion(&self, messages: &[Message]) -> Result<String> {
        let response = self.chat(messages.to_vec()).await?;
        Ok(response.message.content)
    }
}

/// LLM response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub message: Message,
    pub usage: Option<TokenUsage>,
}

/// Token usage information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Provider failures. Carried inside `anyhow::Error` so callers can downcast.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} returned no text in its response")]
    EmptyResponse { provider: &'static str },

    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Behaviour shared by every client
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Dump requests and responses to the console
    pub verbose: bool,
    /// Write every outbound request to this directory
    pub request_log_dir: Option<PathBuf>,
    pub temperature: Option<f32>,
}

impl ClientOptions {
    pub(crate) fn log_outbound(&self, url: &str, body: &serde_json::Value, model: &str, api_key: &str) {
        memchat_logging::log_request(url, body, api_key, self.verbose);

        if let Some(dir) = &self.request_log_dir {
            if let Err(e) = memchat_logging::log_request_to_file(dir, url, body, model, api_key) {
                eprintln!("[Logging error] {}", e);
            }
        }
    }
}
