use std::sync::Arc;

use crate::client::{GeminiClient, LlmClient, OpenAiCompatClient};
use crate::config::{BackendType, ClientConfig};

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client for the configured backend
    ///
    /// # Returns
    /// Arc-wrapped LLM client implementing the LlmClient trait
    pub fn create(config: &ClientConfig) -> Arc<dyn LlmClient> {
        let url = config.resolved_url();

        match config.backend {
            BackendType::Gemini => Arc::new(GeminiClient::new(
                config.api_key.clone(),
                config.model.clone(),
                url,
                config.options.clone(),
            )),
            BackendType::OpenAI => Arc::new(OpenAiCompatClient::new(
                config.api_key.clone(),
                config.model.clone(),
                url,
                config.options.clone(),
            )),
        }
    }
}
