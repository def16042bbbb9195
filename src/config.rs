// GUI configuration
// Read once at startup from environment variables

use std::env;

/// Endpoint used when `CHAT_ENDPOINT_URL` is not set
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080/api/chat";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Full URL of the chat endpoint
    pub endpoint_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint_url: lookup("CHAT_ENDPOINT_URL")
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
        }
    }
}
