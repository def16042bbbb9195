// Client module
// Talks to the chat endpoint and carries replies back to the UI thread

pub mod endpoint;
pub mod runner;

pub use endpoint::{ChatEndpoint, ChatReply, ExchangeError, HttpChatEndpoint};
pub use runner::ExchangeRunner;
