//! HTTP request handlers

use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use super::{AppState, CHAT_PATH};
use crate::llm::LlmRequest;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::path::Path;
use tower_http::services::ServeDir;

/// Create the relay router.
///
/// When `static_dir` is given its files are served for every path the API
/// does not claim.
#[must_use]
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route(CHAT_PATH, post(chat))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

// ============================================================
// Chat relay
// ============================================================

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if !body.get("conversation").is_some_and(Value::is_array) {
        return Err(AppError::BadRequest("Messages must be an array!".to_string()));
    }
    let request: ChatRequest = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid conversation: {e}")))?;

    let turns = request.conversation.len();
    let response = state
        .llm
        .complete(&LlmRequest::new(request.conversation))
        .await
        .map_err(|e| AppError::Internal(e.message))?;

    tracing::debug!(turns, chars = response.text.len(), "Chat reply ready");

    let result = (!response.text.is_empty()).then_some(response.text);
    Ok(Json(ChatResponse { result }))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::warn!(status = %status, error = %message, "Chat request failed");
        }

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
