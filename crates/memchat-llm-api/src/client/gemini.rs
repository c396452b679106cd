use anyhow::Result;
use async_trait::async_trait;

use memchat_models::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Message, Role,
};

use crate::client::{ClientOptions, LlmClient, LlmError, LlmResponse, TokenUsage};
use crate::config::normalize_model_name;

const PROVIDER: &str = "Gemini";

/// Google Generative Language client (generateContent)
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    options: ClientOptions,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String, options: ClientOptions) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model: normalize_model_name(&model),
            base_url,
            options,
            client: reqwest::Client::new(),
        }
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Map the transcript onto generateContent: system messages become the
    /// system instruction, the rest become user/model contents in order.
    pub fn build_request(&self, messages: Vec<Message>) -> GenerateContentRequest {
        let mut system_parts: Vec<String> = Vec::new();
        let mut contents = Vec::with_capacity(messages.len());

        for message in messages {
            match message.role {
                Role::System => system_parts.push(message.content),
                Role::Human => contents.push(Content::text(Some("user"), message.content)),
                Role::Ai => contents.push(Content::text(Some("model"), message.content)),
            }
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(Content::text(None, system_parts.join("\n\n")))
        };

        GenerateContentRequest {
            system_instruction,
            contents,
            generation_config: self.options.temperature.map(|temperature| GenerationConfig {
                temperature: Some(temperature),
                max_output_tokens: None,
            }),
        }
    }
}

fn api_error(status: reqwest::StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    LlmError::Api {
        provider: PROVIDER,
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<LlmResponse> {
        let request = self.build_request(messages);
        let url = self.generate_content_url();
        let body = serde_json::to_value(&request)?;

        self.options.log_outbound(&url, &body, &self.model, &self.api_key);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
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
            return Err(api_error(status, &response_text).into());
        }

        let generated: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|source| LlmError::Decode { provider: PROVIDER, source })?;

        let text = generated
            .candidates
            .first()
            .and_then(|candidate| candidate.text())
            .ok_or(LlmError::EmptyResponse { provider: PROVIDER })?;

        Ok(LlmResponse {
            message: Message::ai(text),
            usage: generated.usage_metadata.map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            }),
        })
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> GeminiClient {
        GeminiClient::new(
            "key".to_string(),
            "models/gemini-1.5-flash".to_string(),
            "https://generativelanguage.googleapis.com/".to_string(),
            ClientOptions::default(),
        )
    }

    #[test]
    fn test_generate_content_url_strips_models_prefix() {
        assert_eq!(
            client().generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_build_request_maps_roles_in_order() {
        let request = client().build_request(vec![
            Message::system("You're an assistant."),
            Message::human("hi"),
            Message::ai("hello"),
            Message::human("how are you?"),
        ]);

        let system = request.system_instruction.unwrap();
        assert_eq!(system.role, None);
        assert_eq!(system.parts[0].text, "You're an assistant.");

        let roles: Vec<_> = request
            .contents
            .iter()
            .map(|c| c.role.clone().unwrap())
            .collect();
        assert_eq!(roles, vec!["user", "model", "user"]);
        assert_eq!(request.contents[2].parts[0].text, "how are you?");
        assert!(request.generation_config.is_none());
    }

    #[test]
    fn test_build_request_without_system_message() {
        let request = client().build_request(vec![Message::human("hi")]);
        assert!(request.system_instruction.is_none());
        assert_eq!(request.contents.len(), 1);
    }

    #[test]
    fn test_api_error_prefers_provider_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let err = api_error(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "Gemini API error (400): API key not valid.");

        let err = api_error(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Gemini API error (502): upstream down");
    }
}
