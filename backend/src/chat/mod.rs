//! Chat module
//!
//! Wire types for the chat endpoint and the canned reply composer.

pub mod models;
pub mod replies;

pub use models::{ChatRequest, ChatResponse};
pub use replies::{compose_reply, pick_opener, DISCLAIMER, REPLY_OPENERS};
