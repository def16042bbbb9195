// State management module
// Holds the immutable settings shared by every request handler

/// Handler state types
pub mod app_state;

pub use app_state::{AppState, SharedState};
