use anyhow::Result;
use async_trait::async_trait;

use memchat_models::{ChatRequest, ChatResponse, Message, Role, WireMessage};

use crate::client::{ClientOptions, LlmClient, LlmError, LlmResponse, TokenUsage};

const PROVIDER: &str = "OpenAI-compatible";

/// Client for any server exposing an OpenAI-compatible chat completions API
pub struct OpenAiCompatClient {
    api_key: String,
    model: String,
    api_url: String,
    options: ClientOptions,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new(api_key: String, model: String, api_url: String, options: ClientOptions) -> Self {
        Self {
            api_key,
            model,
            api_url,
            options,
            client: reqwest::Client::new(),
        }
    }

    fn wire_role(role: Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::Human => "user",
            Role::Ai => "assistant",
        }
    }

    pub fn build_chat_request(&self, messages: Vec<Message>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: messages
                .into_iter()
                .map(|msg| WireMessage {
                    role: Self::wire_role(msg.role).to_string(),
                    content: msg.content,
                })
                .collect(),
            temperature: self.options.temperature,
            max_tokens: None,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<LlmResponse> {
        let request = serde_json::to_value(self.build_chat_request(messages))?;

        self.options.log_outbound(&self.api_url, &request, &self.model, &self.api_key);

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json");
        // Self-hosted servers usually run without a key
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|source| LlmError::Http { provider: PROVIDER, source })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|source| LlmError::Http { provider: PROVIDER, source })?;

        memchat_logging::log_response(&status, &response_text, self.options.verbose);

        if !status.is_success() {
            return Err(LlmError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message: response_text,
            }
            .into());
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|source| LlmError::Decode { provider: PROVIDER, source })?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse { provider: PROVIDER })?;

        Ok(LlmResponse {
            message: Message::ai(choice.message.content),
            usage: chat_response.usage.map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_tokens as u32,
                completion_tokens: usage.completion_tokens as u32,
                total_tokens: usage.total_tokens as u32,
            }),
        })
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
