// Application state shared across handlers
// The chat endpoint keeps no per-request or per-session data

use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Handle passed to every handler through axum's `State` extractor
pub type SharedState = Arc<AppState>;

/// Read-only settings the endpoint needs to answer a request
#[derive(Debug, Clone)]
pub struct AppState {
    /// Artificial latency applied before each reply
    pub reply_delay: Duration,
}

impl AppState {
    /// Create state with an explicit reply delay
    pub fn new(reply_delay: Duration) -> Self {
        Self { reply_delay }
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.chat.reply_delay())
    }

    /// Wrap into the shared handle used by the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_uses_default_delay() {
        let state = AppState::default();
        assert_eq!(state.reply_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.chat.reply_delay_ms = 5;
        let state = AppState::from_config(&config);
        assert_eq!(state.reply_delay, Duration::from_millis(5));
    }
}
