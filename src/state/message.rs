// Chat message model
// A message never changes after it is appended to a session

use chrono::{DateTime, Utc};

/// Unique identifier for a message within a session
pub type MessageId = String;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    /// Typed by the person using the app
    User,
    /// Produced by the chat endpoint (or the app on its behalf)
    Bot,
}

impl Sender {
    /// Lowercase label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single chat bubble
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Unique identifier, assigned in creation order
    pub id: MessageId,
    /// Text content
    pub text: String,
    /// Author of the message
    pub sender: Sender,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(id: MessageId, text: String, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp,
        }
    }

    /// Whether the message was typed by the user
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
