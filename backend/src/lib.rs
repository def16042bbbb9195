//! Chat Assistant Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
/// Shared handler state
pub mod state;
