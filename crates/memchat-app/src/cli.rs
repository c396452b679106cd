use clap::Parser;
use std::path::PathBuf;

use memchat_models::DEFAULT_SYSTEM_PROMPT;

/// CLI arguments for memchat
#[derive(Parser, Debug, Clone)]
#[command(name = "memchat")]
#[command(about = "Browser chat front-end for hosted LLMs with in-memory per-user history")]
#[command(version)]
pub struct Cli {
    /// Model identifier (e.g. gemini-1.5-flash)
    #[arg(long, value_name = "MODEL", env = "GOOGLE_MODEL")]
    pub model: Option<String>,

    /// API key for the model provider
    #[arg(long, value_name = "KEY", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Backend type (gemini, openai)
    #[arg(long, value_name = "BACKEND", default_value = "gemini", env = "MEMCHAT_BACKEND")]
    pub backend: String,

    /// Override the provider URL (base URL for gemini, endpoint for openai)
    #[arg(long, value_name = "URL", env = "MEMCHAT_API_URL")]
    pub api_url: Option<String>,

    /// System instruction prepended to every prompt
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_SYSTEM_PROMPT, env = "MEMCHAT_SYSTEM_PROMPT")]
    pub system_prompt: String,

    /// Whether answered turns are fed back to the model (threaded, display-only)
    #[arg(long, value_name = "MODE", default_value = "threaded", env = "MEMCHAT_HISTORY_MODE")]
    pub history_mode: String,

    /// Sampling temperature passed to the model
    #[arg(long, value_name = "FLOAT", env = "MEMCHAT_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Web server bind address
    #[arg(long, default_value = "127.0.0.1", env = "MEMCHAT_WEB_BIND")]
    pub web_bind: String,

    /// Web server port
    #[arg(long, default_value = "7860", env = "MEMCHAT_WEB_PORT")]
    pub web_port: u16,

    /// Write a JSONL conversation log to this directory
    #[arg(long, value_name = "DIR", env = "MEMCHAT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write every model request to a file (in --log-dir, or ~/.memchat/logs)
    #[arg(long)]
    pub log_requests: bool,

    /// Enable verbose debug output (model requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
