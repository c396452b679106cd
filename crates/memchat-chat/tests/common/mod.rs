#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use memchat_llm_api::{LlmClient, LlmError, LlmResponse, TokenUsage};
use memchat_models::Message;

/// Test double that records every prompt and answers from a script.
/// When the script runs out it echoes the last message back.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_replies(replies: &[&str]) -> Arc<Self> {
        let client = Self::default();
        client
            .replies
            .lock()
            .unwrap()
            .extend(replies.iter().map(|r| Ok(r.to_string())));
        Arc::new(client)
    }

    pub fn push_failure(&self, message: &str) {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
    }

    pub fn prompts(&self) -> Vec<Vec<Message>> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Vec<Message> {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<LlmResponse> {
        self.prompts.lock().unwrap().push(messages.clone());

        let next = self.replies.lock().unwrap().pop_front();
        let text = match next {
            Some(Ok(text)) => text,
            Some(Err(message)) => {
                return Err(LlmError::Api {
                    provider: "scripted",
                    status: 503,
                    message,
                }
                .into())
            }
            None => {
                let last = messages.last().ok_or_else(|| anyhow!("empty prompt"))?;
                format!("echo: {}", last.content)
            }
        };

        Ok(LlmResponse {
            message: Message::ai(text),
            usage: Some(TokenUsage {
                prompt_tokens: 1,
                completion_tokens: 1,
                total_tokens: 2,
            }),
        })
    }

    fn model_name(&self) -> String {
        "scripted-model".to_string()
    }
}

/// Client that parks inside `chat` until released
#[derive(Default)]
pub struct GatedClient {
    pub entered: Notify,
    pub release: Notify,
}

impl GatedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl LlmClient for GatedClient {
    async fn chat(&self, _messages: Vec<Message>) -> Result<LlmResponse> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(LlmResponse {
            message: Message::ai("done"),
            usage: None,
        })
    }

    fn model_name(&self) -> String {
        "gated-model".to_string()
    }
}
