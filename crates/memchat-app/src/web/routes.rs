use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use memchat_chat::ChatSurface;
use memchat_llm_api::LlmError;

use crate::web::protocol::{AskRequest, AskResponse, ChatRequest, ChatResponse, SessionInfo};

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub surface: Arc<ChatSurface>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/chat", post(chat))
        .route("/api/ask", post(ask))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health))
        .with_state(state)
}

/// GET / - Serve the chat page
async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

/// POST /api/chat - Submit the form and get the updated history back
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::debug!(user_id = %request.username, turns = request.history.len(), "chat submit");

    let history = state
        .surface
        .on_submit(&request.username, &request.query, request.history)
        .await
        .inspect_err(|e| tracing::warn!(user_id = %request.username, error = %e, "chat failed"))?;

    Ok(Json(ChatResponse { history }))
}

/// POST /api/ask - Reply text only
async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let reply = state
        .surface
        .ask(&request.username, &request.query)
        .await
        .inspect_err(|e| tracing::warn!(user_id = %request.username, error = %e, "ask failed"))?;

    Ok(Json(AskResponse { reply }))
}

/// GET /api/sessions - List transcripts held in memory
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.surface.store();
    let mut sessions = Vec::new();

    for key in store.keys().await {
        let message_count = match store.get(&key).await {
            Some(transcript) => transcript.lock().await.len(),
            None => 0,
        };
        sessions.push(SessionInfo {
            user_id: key.user_id,
            conversation_id: key.conversation_id,
            message_count,
        });
    }

    Json(serde_json::json!({ "sessions": sessions }))
}

/// GET /api/health
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.surface.chain().model_name(),
        "history_mode": state.surface.mode().as_str(),
        "sessions": state.surface.store().len().await,
    }))
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    Upstream(anyhow::Error),
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        if err.downcast_ref::<LlmError>().is_some() {
            AppError::Upstream(err)
        } else {
            AppError::Internal(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
