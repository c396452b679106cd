// Logging module - conversation and request logging
pub mod conversation_logger;
pub mod request_logger;

use std::path::PathBuf;
use anyhow::{Result, Context};

pub use conversation_logger::ConversationLogger;

pub use request_logger::{
    log_request,
    log_request_to_file,
    log_response,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Show only a prefix of a credential: a quarter of it, at most 6 characters.
/// Short credentials are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let visible = (secret.chars().count() / 4).min(6);
    format!("{}***", secret.chars().take(visible).collect::<String>())
}

/// Get or create the base memchat directory (~/.memchat)
pub fn get_memchat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let memchat_dir = PathBuf::from(home_dir).join(".memchat");

    if !memchat_dir.exists() {
        std::fs::create_dir_all(&memchat_dir)
            .context("Failed to create memchat directory")?;
    }

    Ok(memchat_dir)
}

/// Get or create the default logs directory (~/.memchat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_memchat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
