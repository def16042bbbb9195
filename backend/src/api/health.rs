//! Liveness endpoints
//!
//! Health also reports the configured reply delay so a client can tell a
//! slow reply from a stuck one.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::SharedState;

#[allow(missing_docs)]
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub status: String,
    pub chat_endpoint: String,
}

#[allow(missing_docs)]
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reply_delay_ms: u64,
    pub reply_templates: usize,
}

/// GET / - greeting pointing at the chat route
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Chat Assistant Backend!".to_string(),
        status: "ok".to_string(),
        chat_endpoint: "POST /api/chat".to_string(),
    })
}

/// GET /api/health - health check with the active chat settings
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reply_delay_ms: u64::try_from(state.reply_delay.as_millis()).unwrap_or(u64::MAX),
        reply_templates: crate::chat::REPLY_OPENERS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::time::Duration;

    #[tokio::test]
    async fn test_health_check_reports_reply_delay() {
        let state = AppState::new(Duration::from_millis(250)).shared();
        let response = health_check(State(state)).await.0;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.reply_delay_ms, 250);
        assert_eq!(response.reply_templates, 5);
    }

    #[tokio::test]
    async fn test_hello_world_points_at_chat() {
        let response = hello_world().await.0;
        assert_eq!(response.status, "ok");
        assert_eq!(response.chat_endpoint, "POST /api/chat");
    }
}
