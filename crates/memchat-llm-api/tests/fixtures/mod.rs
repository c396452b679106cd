#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Mock server utilities for testing LLM API clients
pub struct LLMMockServer {
    server: MockServer,
}

impl LLMMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn generate_content_path() -> String {
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    }

    /// Mock successful generateContent response for a request matching `expected_body`
    pub async fn mock_gemini_success(&self, expected_body: Value, response_text: &str) {
        Mock::given(method("POST"))
            .and(path(Self::generate_content_path()))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .and(body_partial_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": response_text }]
                    },
                    "finishReason": "STOP",
                    "index": 0
                }],
                "usageMetadata": {
                    "promptTokenCount": 10,
                    "candidatesTokenCount": 20,
                    "totalTokenCount": 30
                },
                "modelVersion": TEST_MODEL
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a Google API error envelope
    pub async fn mock_gemini_error(&self, status: u16, error_status: &str, error_message: &str) {
        Mock::given(method("POST"))
            .and(path(Self::generate_content_path()))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "code": status,
                    "message": error_message,
                    "status": error_status
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is `body`
    pub async fn mock_gemini_raw(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::generate_content_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response with a non-JSON body
    pub async fn mock_gemini_garbage(&self) {
        Mock::given(method("POST"))
            .and(path(Self::generate_content_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock successful OpenAI-compatible response
    pub async fn mock_openai_success(&self, expected_body: Value, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .and(body_partial_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "test-model",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock OpenAI-compatible error
    pub async fn mock_openai_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
