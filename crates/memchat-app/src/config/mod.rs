use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use memchat_chat::HistoryMode;
use memchat_llm_api::{BackendType, ClientConfig, ClientOptions};

use crate::cli::Cli;

pub mod helpers;

use helpers::{non_empty, parse_bind_addr};

/// Problems detected before the server starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no model configured: set GOOGLE_MODEL in .env or pass --model")]
    MissingModel,

    #[error("no API key configured: set GOOGLE_API_KEY in .env or pass --api-key")]
    MissingApiKey,

    #[error("unknown backend '{0}' (expected gemini or openai)")]
    UnknownBackend(String),

    #[error("unknown history mode '{0}' (expected threaded or display-only)")]
    UnknownHistoryMode(String),

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("no directory for request logs ({0}): pass --log-dir")]
    LogsDirUnavailable(String),
}

/// Validated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub system_prompt: String,
    pub history_mode: HistoryMode,
    pub bind_addr: SocketAddr,
    pub conversation_log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from parsed CLI arguments (which already
    /// include environment fallbacks)
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let backend = BackendType::from_str(&cli.backend)
            .ok_or_else(|| ConfigError::UnknownBackend(cli.backend.clone()))?;

        let history_mode = HistoryMode::from_str(&cli.history_mode)
            .ok_or_else(|| ConfigError::UnknownHistoryMode(cli.history_mode.clone()))?;

        let model = non_empty(cli.model.as_deref()).ok_or(ConfigError::MissingModel)?;
        let api_url = non_empty(cli.api_url.as_deref());

        // A self-hosted OpenAI-compatible server may run without a key
        let api_key = match non_empty(cli.api_key.as_deref()) {
            Some(key) => key,
            None if backend == BackendType::OpenAI && api_url.is_some() => String::new(),
            None => return Err(ConfigError::MissingApiKey),
        };

        let bind_addr = parse_bind_addr(&cli.web_bind, cli.web_port)?;

        let request_log_dir = match (&cli.log_dir, cli.log_requests) {
            (_, false) => None,
            (Some(dir), true) => Some(dir.clone()),
            (None, true) => Some(
                memchat_logging::get_logs_dir()
                    .map_err(|e| ConfigError::LogsDirUnavailable(format!("{:#}", e)))?,
            ),
        };

        let client = ClientConfig {
            backend,
            model,
            api_key,
            api_url,
            options: ClientOptions {
                verbose: cli.verbose,
                request_log_dir,
                temperature: cli.temperature,
            },
        };

        Ok(Self {
            client,
            system_prompt: cli.system_prompt.clone(),
            history_mode,
            bind_addr,
            conversation_log_dir: cli.log_dir.clone(),
        })
    }
}
