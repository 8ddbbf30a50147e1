//! Chatbot proxy request handlers.
//!
//! These endpoints return plain JSON bodies on success (they predate
//! the envelope); failures still flow through [`ApiError`], whose
//! response is an envelope, so no route can emit an unformatted error.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::ApiResult;
use crate::services::chat;
use crate::wrap::parse_body;

#[derive(Debug, Default, Deserialize)]
struct ChatBody {
    #[serde(default)]
    message: String,
}

/// `POST /ai/chat` — send a message to Gemini with history attached.
pub async fn chat_handler(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Value>> {
    let body: ChatBody = parse_body(&body)?;
    let response = chat::send_message(
        &state.http,
        &state.config,
        &state.chat_history,
        &body.message,
    )
    .await?;
    Ok(Json(json!({ "response": response })))
}

/// `POST /ai/clear_chat` — drop the accumulated history.
pub async fn clear_chat_handler(State(state): State<AppState>) -> Json<Value> {
    chat::clear_history(&state.chat_history).await;
    Json(json!({ "status": "success", "message": "Chat history cleared." }))
}

/// `GET /ai/list_models` — list models visible to the API key.
pub async fn list_models_handler(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let models = chat::list_models(&state.http, &state.config).await?;
    Ok(Json(json!({ "availableModels": models })))
}
