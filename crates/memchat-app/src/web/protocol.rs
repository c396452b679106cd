use serde::{Deserialize, Serialize};

use memchat_models::DisplayTranscript;

/// POST /api/chat body: the form fields plus the history currently on screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub username: String,
    pub query: String,
    #[serde(default)]
    pub history: DisplayTranscript,
}

/// POST /api/chat reply: the history to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub history: DisplayTranscript,
}

/// POST /api/ask body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub username: String,
    pub query: String,
}

/// POST /api/ask reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub reply: String,
}

/// Session information for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: String,
    pub conversation_id: String,
    pub message_count: usize,
}
