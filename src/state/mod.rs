// State management module
// Handles the chat session: message history, input buffer and exchange flag

pub mod message;
pub mod session;

pub use message::{Message, Sender};
pub use session::ChatSession;
