use crate::client::ClientOptions;

pub mod factory;
pub use factory::ClientFactory;

/// Backend type for the hosted model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Gemini,
    OpenAI,
}

impl BackendType {
    /// Parse backend type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" | "google-genai" => Some(Self::Gemini),
            "openai" | "openai-compatible" | "llama" | "llamacpp" | "llama.cpp" => Some(Self::OpenAI),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
        }
    }
}

/// Default Google Generative Language API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: &BackendType) -> String {
    match backend {
        BackendType::Gemini => GEMINI_API_URL.to_string(),
        BackendType::OpenAI => OPENAI_API_URL.to_string(),
    }
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}

/// Accept both "gemini-1.5-flash" and the resource form "models/gemini-1.5-flash"
pub fn normalize_model_name(model: &str) -> String {
    model.trim().trim_start_matches("models/").to_string()
}

/// Everything needed to build a client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendType,
    pub model: String,
    pub api_key: String,
    pub api_url: Option<String>,
    pub options: ClientOptions,
}

impl ClientConfig {
    pub fn new(backend: BackendType, model: String, api_key: String) -> Self {
        Self {
            backend,
            model,
            api_key,
            api_url: None,
            options: ClientOptions::default(),
        }
    }

    /// The URL requests will be sent to (base URL for Gemini, full endpoint otherwise)
    pub fn resolved_url(&self) -> String {
        match (&self.backend, &self.api_url) {
            (BackendType::Gemini, Some(url)) => url.clone(),
            (BackendType::OpenAI, Some(url)) => normalize_api_url(url),
            (backend, None) => get_default_url_for_backend(backend),
        }
    }
}
