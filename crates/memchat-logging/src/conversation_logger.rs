use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use memchat_models::{Role, SessionKey};

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 Local time
    user_id: &'a str,
    conversation_id: &'a str,
    role: Role,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_tokens: Option<u32>,
}

/// Appends every chat turn as one JSON line
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Mutex<Option<File>>,
}

impl ConversationLogger {
    /// Create a new logger in `dir`; the file name is derived from the local time.
    pub async fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).await?;

        let filename = format!("memchat-{}.jsonl", Local::now().format("%Y-%m-%d-%H%M%S"));
        let file_path = dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;

        Ok(Self {
            file_path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry. Write failures are reported, never returned.
    pub async fn log(
        &self,
        key: &SessionKey,
        role: Role,
        content: &str,
        model: Option<&str>,
        total_tokens: Option<u32>,
    ) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            user_id: &key.user_id,
            conversation_id: &key.conversation_id,
            role,
            content,
            model,
            total_tokens,
        };

        let Ok(mut json) = serde_json::to_string(&entry) else {
            return;
        };
        json.push('\n');

        let mut guard = self.file.lock().await;
        if let Some(file) = guard.as_mut() {
            if let Err(e) = file.write_all(json.as_bytes()).await {
                eprintln!("[Logging error] {}", e);
            } else {
                let _ = file.flush().await;
            }
        }
    }

    /// Close the logger. Called on graceful shutdown.
    pub async fn shutdown(&self) {
        if let Some(file) = self.file.lock().await.take() {
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_log_writes_one_line_per_entry() {
        let dir = TempDir::new().unwrap();
        let logger = ConversationLogger::new(dir.path()).await.unwrap();
        let key = SessionKey::for_user("alice");

        logger.log(&key, Role::Human, "hello", None, None).await;
        logger
            .log(&key, Role::Ai, "hi alice", Some("gemini-1.5-flash"), Some(12))
            .await;
        logger.shutdown().await;

        let written = std::fs::read_to_string(logger.file_path()).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["user_id"], "alice");
        assert_eq!(lines[0]["conversation_id"], "1");
        assert_eq!(lines[0]["role"], "human");
        assert!(lines[0].get("model").is_none());
        assert_eq!(lines[1]["role"], "ai");
        assert_eq!(lines[1]["model"], "gemini-1.5-flash");
        assert_eq!(lines[1]["total_tokens"], 12);
    }

    #[tokio::test]
    async fn test_log_after_shutdown_is_ignored() {
        let dir = TempDir::new().unwrap();
        let logger = ConversationLogger::new(dir.path()).await.unwrap();
        logger.shutdown().await;

        logger
            .log(&SessionKey::for_user("bob"), Role::Human, "late", None, None)
            .await;

        let written = std::fs::read_to_string(logger.file_path()).unwrap();
        assert!(written.is_empty());
    }
}
