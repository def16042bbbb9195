//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Default artificial latency before a reply is returned
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Chat endpoint configuration
    pub chat: ChatConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Chat endpoint configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Simulated processing time before a reply is composed (in milliseconds)
    pub reply_delay_ms: u64,
}

impl ChatConfig {
    /// Reply delay as a `Duration`
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                host: "0.0.0.0".to_string(),
            },
            chat: ChatConfig {
                reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            chat: ChatConfig {
                reply_delay_ms: env::var("REPLY_DELAY_MS")
                    .ok()
                    .and_then(|d| d.parse().ok())
                    .unwrap_or(defaults.chat.reply_delay_ms),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("REPLY_DELAY_MS");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("PORT", "3000");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("REPLY_DELAY_MS", "250");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(250));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values_fall_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("REPLY_DELAY_MS", "-5");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chat.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);

        clear_env();
    }
}
