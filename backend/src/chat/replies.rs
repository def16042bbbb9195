//! Canned reply composition
//!
//! The endpoint has no model behind it. Every reply is one of five fixed
//! openers, an echo of the user's text and a note on how to wire up a real
//! AI provider.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Fixed set of reply openers, picked uniformly at random
pub const REPLY_OPENERS: [&str; 5] = [
    "That's an interesting question! Let me think about that...",
    "I understand what you're asking. Here's my perspective...",
    "Thanks for sharing that with me. I'd be happy to help!",
    "That's a great point! Have you considered...",
    "I see what you mean. Let me provide some insights...",
];

/// Suffix appended to every reply
pub const DISCLAIMER: &str = "To connect this to a real AI service, you'll need to integrate with an API like OpenAI's GPT or Anthropic's Claude.";

/// Pick one opener uniformly at random
pub fn pick_opener<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    REPLY_OPENERS.choose(rng).copied()
}

/// Compose the full reply for a user message
///
/// Returns `None` only if no opener could be selected.
pub fn compose_reply<R: Rng + ?Sized>(message: &str, rng: &mut R) -> Option<String> {
    let opener = pick_opener(rng)?;
    Some(format!(
        "{} You said: \"{}\". {}",
        opener, message, DISCLAIMER
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_compose_reply_structure() {
        let mut rng = StdRng::seed_from_u64(7);
        let reply = compose_reply("hello", &mut rng).unwrap();

        assert!(REPLY_OPENERS.iter().any(|o| reply.starts_with(o)));
        assert!(reply.contains(r#"You said: "hello"."#));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_compose_reply_empty_message() {
        let mut rng = StdRng::seed_from_u64(1);
        let reply = compose_reply("", &mut rng).unwrap();
        assert!(reply.contains(r#"You said: ""."#));
    }

    #[test]
    fn test_compose_reply_keeps_message_verbatim() {
        let mut rng = StdRng::seed_from_u64(3);
        let message = "  multi\nline \"quoted\" ünïcode  ";
        let reply = compose_reply(message, &mut rng).unwrap();
        assert!(reply.contains(message));
    }

    #[test]
    fn test_pick_opener_covers_all_templates() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..500).filter_map(|_| pick_opener(&mut rng)).collect();
        assert_eq!(seen.len(), REPLY_OPENERS.len());
    }

    #[test]
    fn test_thread_rng_reply_starts_with_opener() {
        let reply = compose_reply("ping", &mut rand::rng()).unwrap();
        assert!(REPLY_OPENERS.iter().any(|o| reply.starts_with(o)));
    }
}
