//! # memchat-llm-api
//!
//! A small interface over hosted chat-completion APIs:
//! - Google Generative Language (Gemini) `generateContent`
//! - OpenAI-compatible `/v1/chat/completions` servers
//!
//! Messages use the tagged [`memchat_models::Message`] type; each client maps
//! roles onto its provider's wire format.
//!
//! ## Example
//!
//! ```rust,no_run
//! use memchat_llm_api::{BackendType, ClientConfig, ClientFactory};
//! use memchat_models::Message;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new(
//!         BackendType::Gemini,
//!         "gemini-1.5-flash".to_string(),
//!         "your-api-key".to_string(),
//!     );
//!     let client = ClientFactory::create(&config);
//!
//!     let messages = vec![
//!         Message::system("You're an assistant."),
//!         Message::human("Hello!"),
//!     ];
//!
//!     let response = client.chat(messages).await?;
//!     println!("Response: {}", response.message.content);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


// Re-export commonly used types
pub use client::{
    LlmClient,
    LlmError,
    LlmResponse,
    TokenUsage,
    ClientOptions,
};

pub use config::{
    BackendType,
    ClientConfig,
    ClientFactory,
    GEMINI_API_URL,
    OPENAI_API_URL,
    normalize_api_url,
    normalize_model_name,
    get_default_url_for_backend,
};
