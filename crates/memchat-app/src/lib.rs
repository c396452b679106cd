//! memchat application library
//!
//! Configuration, startup and the browser chat surface.

pub use memchat_chat::{self as chat, ChatSurface, ConversationChain, HistoryMode, SessionStore};
pub use memchat_llm_api::{self as llm_api, ClientFactory, LlmClient};
pub use memchat_models as models;

pub mod app;
pub mod cli;
pub mod config;
pub mod web;

pub use app::{run_web_server, setup_from_cli};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
