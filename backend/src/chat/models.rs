//! Chat data models
//!
//! Defines the request and response bodies of `POST /api/chat`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Text submitted by the user (may be empty, no length limit)
    pub message: String,
}

/// Body of a successful chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Composed reply text
    pub response: String,
    /// When the reply was produced (ISO-8601, UTC)
    pub timestamp: String,
}

impl ChatResponse {
    /// Create a response stamped with the given instant
    pub fn new(response: String, at: DateTime<Utc>) -> Self {
        Self {
            response,
            timestamp: format_timestamp(at),
        }
    }
}

/// Render an instant as ISO-8601 with a `Z` suffix
///
/// Sub-second digits are kept at full precision so the rendered time never
/// sorts before the instant it was taken from.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
