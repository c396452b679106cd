use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation id used for every session; one ongoing conversation per user
pub const DEFAULT_CONVERSATION_ID: &str = "1";

/// System instruction prepended to every prompt
pub const DEFAULT_SYSTEM_PROMPT: &str = "You're an assistant.";

/// Speaker label used for model replies in the display transcript
pub const AI_SPEAKER: &str = "AI";

/// Author of a message in the model-context transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Human,
    Ai,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Human => "human",
            Role::Ai => "ai",
        }
    }

    /// Parse a role name, accepting the common provider aliases
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(Role::System),
            "human" | "user" => Some(Role::Human),
            "ai" | "assistant" | "model" => Some(Role::Ai),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Role::Ai, content)
    }
}

/// Identifies one transcript: (user id, conversation id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    pub user_id: String,
    pub conversation_id: String,
}

impl SessionKey {
    pub fn new(user_id: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            conversation_id: conversation_id.into(),
        }
    }

    /// Key for a user's single ongoing conversation
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self::new(user_id, DEFAULT_CONVERSATION_ID)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user_id, self.conversation_id)
    }
}

/// One visible (speaker, text) pair. Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTurn(pub String, pub String);

impl DisplayTurn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self(speaker.into(), text.into())
    }

    pub fn speaker(&self) -> &str {
        &self.0
    }

    pub fn text(&self) -> &str {
        &self.1
    }
}

/// Visual history owned by the chat surface; never sent to the model
pub type DisplayTranscript = Vec<DisplayTurn>;
