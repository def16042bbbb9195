//! Chat API
//!
//! `POST /api/chat` answers every message with a canned reply after a fixed
//! delay. The handler is stateless: nothing about the request outlives it.

use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::chat::{compose_reply, ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::state::SharedState;

/// Chat endpoint
///
/// 1. Parses `{ "message": string }` from the raw body, whatever the
///    content type (a body that does not parse is a `MalformedRequest`)
/// 2. Waits for the configured reply delay
/// 3. Composes a reply from a random opener and the echoed message
/// 4. Returns the reply stamped with the current time
pub async fn chat(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    info!(
        message_len = request.message.len(),
        delay_ms = state.reply_delay.as_millis(),
        "Chat request received"
    );

    // Simulate processing time
    tokio::time::sleep(state.reply_delay).await;

    let response = compose_reply(&request.message, &mut rand::rng())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("No reply template available")))?;

    Ok(Json(ChatResponse::new(response, Utc::now())))
}
