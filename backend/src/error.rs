//! Error types and error handling for the application
//!
//! Every failure of the chat endpoint is terminal for that single request and
//! is reported to the caller as a server error with a generic message. The
//! underlying cause is only written to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for any endpoint failure
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to process message";

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body did not parse as `{ "message": string }`
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedRequest(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        tracing::error!(
            status = status.as_u16(),
            error = %self,
            "Error in chat API"
        );

        let body = Json(json!({
            "error": GENERIC_ERROR_MESSAGE,
        }));

        (status, body).into_response()
    }
}
