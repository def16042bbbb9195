// Chat session state
// Owns the append-only message history and the one-exchange-at-a-time flag

use chrono::{DateTime, Utc};

#[cfg(test)]
use crate::client::ChatEndpoint;
use crate::client::{ChatReply, ExchangeError};
use crate::state::message::{Message, MessageId, Sender};

/// Bot message every new session starts with
pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Bot message shown when an exchange fails for any reason
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// One chat session
/// Messages are only ever appended; nothing is edited or removed
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Ordered message history (oldest first)
    messages: Vec<Message>,
    /// Text currently typed into the input field
    pub pending_input: String,
    /// True exactly while a request to the endpoint is outstanding
    awaiting_reply: bool,
    /// Next message id to hand out
    next_id: u64,
    /// Set whenever a message is appended, cleared by the renderer
    scroll_requested: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            pending_input: String::new(),
            awaiting_reply: false,
            next_id: 1,
            scroll_requested: false,
        };
        session.append(GREETING.to_string(), Sender::Bot, Utc::now());
        session
    }
}

impl ChatSession {
    /// Create a new session seeded with the greeting
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in creation order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recently appended message
    #[cfg(test)]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether an exchange is in flight
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Number of messages exchanged, not counting the greeting
    pub fn exchanged_count(&self) -> usize {
        self.messages.len().saturating_sub(1)
    }

    /// Whether the current input may be submitted
    pub fn can_submit(&self) -> bool {
        !self.awaiting_reply && !self.pending_input.trim().is_empty()
    }

    /// Start an exchange with the given text
    ///
    /// Appends the user message, clears the input and marks the session as
    /// awaiting a reply. Returns the text to send to the endpoint, or `None`
    /// (leaving the session untouched) if the text is blank or an exchange is
    /// already in flight.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        if self.awaiting_reply {
            tracing::debug!("Submit ignored, reply still outstanding");
            return None;
        }

        self.append(text.to_string(), Sender::User, Utc::now());
        self.pending_input.clear();
        self.awaiting_reply = true;
        Some(text.to_string())
    }

    /// Submit whatever is currently in the input field
    pub fn submit_pending(&mut self) -> Option<String> {
        let text = self.pending_input.clone();
        self.submit(&text)
    }

    /// Finish the outstanding exchange with the endpoint's outcome
    ///
    /// Appends the reply (or the generic error message) and clears the
    /// awaiting flag. Returns false if no exchange was outstanding.
    pub fn resolve(&mut self, outcome: Result<ChatReply, ExchangeError>) -> bool {
        if !self.awaiting_reply {
            tracing::warn!("Received a reply with no exchange outstanding, dropping it");
            return false;
        }

        match outcome {
            Ok(reply) => {
                self.append(reply.response, Sender::Bot, reply.timestamp);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error sending message");
                self.append(ERROR_REPLY.to_string(), Sender::Bot, Utc::now());
            }
        }
        self.awaiting_reply = false;
        true
    }

    /// Run a full exchange against an endpoint: submit, await, resolve
    ///
    /// The GUI splits these steps across frames via `ExchangeRunner`; this
    /// drives them inline. Returns false without calling the endpoint if the
    /// submission is rejected.
    #[cfg(test)]
    pub async fn exchange<E>(&mut self, text: &str, endpoint: &E) -> bool
    where
        E: ChatEndpoint + ?Sized,
    {
        let Some(message) = self.submit(text) else {
            return false;
        };
        let outcome = endpoint.send_message(&message).await;
        self.resolve(outcome)
    }

    /// Consume the pending scroll-to-latest request, if any
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    fn append(&mut self, text: String, sender: Sender, timestamp: DateTime<Utc>) {
        let id: MessageId = self.next_id.to_string();
        self.next_id += 1;
        tracing::debug!(id = %id, sender = sender.as_str(), "Appending message");
        self.messages.push(Message::new(id, text, sender, timestamp));
        self.scroll_requested = true;
    }
}
