use anyhow::Result;
use std::sync::Arc;

use memchat_llm_api::{LlmClient, LlmResponse};
use memchat_models::{Message, SessionKey, DEFAULT_SYSTEM_PROMPT};

use crate::store::SessionStore;

/// Prompt pipeline: system instruction, then the session transcript, then the
/// new question. Reads history from the store but never writes it.
pub struct ConversationChain {
    client: Arc<dyn LlmClient>,
    store: Arc<SessionStore>,
    system_prompt: String,
}

impl ConversationChain {
    pub fn new(client: Arc<dyn LlmClient>, store: Arc<SessionStore>) -> Self {
        Self {
            client,
            store,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn model_name(&self) -> String {
        self.client.model_name()
    }

    /// Build the prompt from an explicit history
    pub fn compose_with(&self, history: &[Message], question: &str) -> Vec<Message> {
        let mut prompt = Vec::with_capacity(history.len() + 2);
        prompt.push(Message::system(self.system_prompt.clone()));
        prompt.extend_from_slice(history);
        prompt.push(Message::human(question));
        prompt
    }

    /// Build the prompt for `key` from the stored transcript
    pub async fn compose(&self, key: &SessionKey, question: &str) -> Vec<Message> {
        let transcript = self.store.get_or_create(key).await;
        let guard = transcript.lock().await;
        self.compose_with(guard.messages(), question)
    }

    /// Submit `question` against an explicit history. Callers that already
    /// hold the transcript lock use this to avoid re-locking.
    pub async fn invoke_with_history(&self, history: &[Message], question: &str) -> Result<LlmResponse> {
        let prompt = self.compose_with(history, question);
        self.client.chat(prompt).await
    }

    /// Submit `question` for `key` and return the reply text
    pub async fn invoke(&self, key: &SessionKey, question: &str) -> Result<String> {
        let prompt = self.compose(key, question).await;
        let response = self.client.chat(prompt).await?;
        Ok(response.message.content)
    }
}
