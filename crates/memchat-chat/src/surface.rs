use anyhow::Result;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use memchat_logging::ConversationLogger;
use memchat_models::{DisplayTranscript, DisplayTurn, Message, Role, SessionKey, AI_SPEAKER};

use crate::chain::ConversationChain;
use crate::store::SessionStore;

/// Whether completed turns are written back into the model-context transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Append the question and reply after each turn so the model sees prior context
    #[default]
    Threaded,
    /// Only the display transcript grows; the model sees no history
    DisplayOnly,
}

impl HistoryMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "threaded" | "thread" | "full" => Some(Self::Threaded),
            "display-only" | "display_only" | "displayonly" | "none" => Some(Self::DisplayOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threaded => "threaded",
            Self::DisplayOnly => "display-only",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn orchestration behind the chat form
pub struct ChatSurface {
    chain: ConversationChain,
    mode: HistoryMode,
    logger: Option<Arc<ConversationLogger>>,
    /// One lock per session, held for a whole turn
    turns: Mutex<HashMap<SessionKey, Arc<Mutex<()>>>>,
}

impl ChatSurface {
    pub fn new(chain: ConversationChain, mode: HistoryMode) -> Self {
        Self {
            chain,
            mode,
            logger: None,
            turns: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<ConversationLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn chain(&self) -> &ConversationChain {
        &self.chain
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        self.chain.store()
    }

    /// Handle one form submit: record the user's turn, ask the model, record
    /// the reply. On error the transcripts are left untouched and the error
    /// is returned to the caller.
    pub async fn on_submit(
        &self,
        username: &str,
        query: &str,
        mut display: DisplayTranscript,
    ) -> Result<DisplayTranscript> {
        display.push(DisplayTurn::new(username, query));
        let reply = self.ask(username, query).await?;
        display.push(DisplayTurn::new(AI_SPEAKER, reply));
        Ok(display)
    }

    /// Ask on behalf of `username` and return only the reply text
    pub async fn ask(&self, username: &str, query: &str) -> Result<String> {
        let key = SessionKey::for_user(username);
        let turn_lock = self.turn_lock(&key).await;
        let _turn = turn_lock.lock().await;

        let transcript = self.store().get_or_create(&key).await;
        let history = transcript.lock().await.messages().to_vec();

        let response = self.chain.invoke_with_history(&history, query).await?;
        let reply = response.message.content.clone();

        if self.mode == HistoryMode::Threaded {
            transcript
                .lock()
                .await
                .add_messages([Message::human(query), response.message]);
        }

        if let Some(logger) = &self.logger {
            let model = self.chain.model_name();
            let total_tokens = response.usage.as_ref().map(|u| u.total_tokens);
            logger.log(&key, Role::Human, query, None, None).await;
            logger
                .log(&key, Role::Ai, &reply, Some(&model), total_tokens)
                .await;
        }

        Ok(reply)
    }

    async fn turn_lock(&self, key: &SessionKey) -> Arc<Mutex<()>> {
        let mut turns = self.turns.lock().await;
        Arc::clone(turns.entry(key.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_mode_parsing() {
        assert_eq!(HistoryMode::from_str("threaded"), Some(HistoryMode::Threaded));
        assert_eq!(HistoryMode::from_str("Display-Only"), Some(HistoryMode::DisplayOnly));
        assert_eq!(HistoryMode::from_str("none"), Some(HistoryMode::DisplayOnly));
        assert_eq!(HistoryMode::from_str("sometimes"), None);
        assert_eq!(HistoryMode::default(), HistoryMode::Threaded);
        assert_eq!(HistoryMode::DisplayOnly.to_string(), "display-only");
    }
}
