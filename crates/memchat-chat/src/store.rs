use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use memchat_models::{Message, SessionKey};

/// Ordered model-context history for one session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn add_messages(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Handle to a transcript shared between the store and whoever is using it.
/// The lock guards reads and appends only; it is never held across a model call.
pub type SharedTranscript = Arc<Mutex<Transcript>>;

/// In-memory map from session key to transcript. Entries are created lazily
/// and live until the store is dropped.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionKey, SharedTranscript>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the transcript for `key`, creating an empty one if needed.
    /// Existing transcripts are returned as-is, never reset.
    pub async fn get_or_create(&self, key: &SessionKey) -> SharedTranscript {
        if let Some(transcript) = self.sessions.read().await.get(key) {
            return Arc::clone(transcript);
        }

        // Another task may have inserted between the two locks; entry() keeps the first
        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(key.clone()).or_default())
    }

    pub async fn get(&self, key: &SessionKey) -> Option<SharedTranscript> {
        self.sessions.read().await.get(key).cloned()
    }

    pub async fn contains(&self, key: &SessionKey) -> bool {
        self.sessions.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Session keys in sorted order
    pub async fn keys(&self) -> Vec<SessionKey> {
        let mut keys: Vec<_> = self.sessions.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}
