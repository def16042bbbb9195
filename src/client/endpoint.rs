//! Chat endpoint client
//!
//! HTTP client for `POST /api/chat`. Every way an exchange can go wrong is an
//! `ExchangeError`; the session turns all of them into the same bot message.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body sent to the endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Successful reply from the endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    /// Reply text
    pub response: String,
    /// When the endpoint produced the reply
    pub timestamp: DateTime<Utc>,
}

/// Reasons an exchange with the endpoint failed
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Request could not be sent or the response could not be read
    #[error("Failed to reach chat endpoint: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("Chat endpoint returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body was not a valid reply
    #[error("Failed to parse chat endpoint response: {0}")]
    Decode(String),
}

/// Something that can answer a chat message
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Send one message and wait for the reply
    async fn send_message(&self, message: &str) -> Result<ChatReply, ExchangeError>;
}

/// `ChatEndpoint` backed by the HTTP chat API
#[derive(Debug, Clone)]
pub struct HttpChatEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpChatEndpoint {
    /// Create a client posting to the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// URL requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send_message(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        tracing::debug!(
            url = %self.url,
            message_len = message.len(),
            "Sending chat message"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let reply: ChatReply = serde_json::from_str(&body)
            .map_err(|e| ExchangeError::Decode(format!("{} - Response body: {}", e, body)))?;

        tracing::debug!(
            response_len = reply.response.len(),
            "Received chat reply"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_send_message_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "message": "hello" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "response": "That's a great point! Have you considered... You said: \"hello\".",
                    "timestamp": "2024-05-01T12:30:00.000Z"
                }"#,
            )
            .create_async()
            .await;

        let endpoint = HttpChatEndpoint::new(format!("{}/api/chat", server.url()));
        let result = endpoint.send_message("hello").await;

        mock.assert_async().await;
        let reply = result.unwrap();
        assert!(reply.response.contains(r#"You said: "hello""#));
        assert_eq!(reply.timestamp.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[tokio::test]
    async fn test_send_message_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(500)
            .with_body(r#"{"error": "Failed to process message"}"#)
            .create_async()
            .await;

        let endpoint = HttpChatEndpoint::new(format!("{}/api/chat", server.url()));
        let result = endpoint.send_message("hello").await;

        mock.assert_async().await;
        match result {
            Err(ExchangeError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("Failed to process message"));
            }
            other => panic!("Expected Status error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_message_invalid_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let endpoint = HttpChatEndpoint::new(format!("{}/api/chat", server.url()));
        let result = endpoint.send_message("hello").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ExchangeError::Decode(_))));
    }

    #[tokio::test]
    async fn test_send_message_bad_timestamp() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body(r#"{"response": "ok", "timestamp": "yesterday"}"#)
            .create_async()
            .await;

        let endpoint = HttpChatEndpoint::new(format!("{}/api/chat", server.url()));
        let result = endpoint.send_message("hello").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ExchangeError::Decode(_))));
    }

    #[tokio::test]
    async fn test_send_message_unreachable() {
        // Grab a free port, then release it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let endpoint = HttpChatEndpoint::new(format!("http://127.0.0.1:{}/api/chat", port));
        let result = endpoint.send_message("hello").await;
        assert!(matches!(result, Err(ExchangeError::Transport(_))));
    }
}
