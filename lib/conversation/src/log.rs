//! The shared, append-only conversation log.
//!
//! The log is process-wide: every inbound message appends to the same
//! history, and the full history is sent to the model on each call.
//! Access is serialized through an internal lock so that concurrent
//! webhook requests cannot interleave snapshot-then-append sequences.

use crate::message::{Message, MessageRole};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Confirmation returned to the user after a reset.
pub const RESET_CONFIRMATION: &str = "Conversation history has been reset.";

/// The keyword that clears the conversation.
const RESET_KEYWORD: &str = "reset";

/// Returns true if the message is the reset command.
///
/// The check is case-insensitive and ignores surrounding whitespace.
/// A reset message never reaches enrichment or the model.
#[must_use]
pub fn is_reset_command(message: &str) -> bool {
    message.trim().eq_ignore_ascii_case(RESET_KEYWORD)
}

/// The shared conversation history.
///
/// Cloning the log yields another handle to the same history. Growth is
/// unbounded: there is no eviction policy, and the full history is sent
/// on every model call.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    inner: Arc<Mutex<Vec<Message>>>,
}

impl ConversationLog {
    /// Creates a new, empty conversation log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Message>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a message at the end of the history.
    pub fn append(&self, message: Message) {
        self.guard().push(message);
    }

    /// Appends a user turn.
    pub fn append_user(&self, content: impl Into<String>) {
        self.append(Message::new(MessageRole::User, content));
    }

    /// Appends an assistant turn.
    pub fn append_assistant(&self, content: impl Into<String>) {
        self.append(Message::new(MessageRole::Assistant, content));
    }

    /// Clears the history and returns the fixed confirmation string.
    pub fn reset(&self) -> &'static str {
        self.guard().clear();
        RESET_CONFIRMATION
    }

    /// Returns a point-in-time copy of the history.
    ///
    /// The caller will not observe later appends or resets.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Message> {
        self.guard().clone()
    }

    /// Returns the number of messages in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let log = ConversationLog::new();
        log.append_user("first");
        log.append_assistant("second");
        log.append_user("third");

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].content, "first");
        assert_eq!(snapshot[1].content, "second");
        assert_eq!(snapshot[2].content, "third");
        assert_eq!(snapshot[1].role, MessageRole::Assistant);
    }

    #[test]
    fn reset_clears_and_confirms() {
        let log = ConversationLog::new();
        log.append_user("hello");
        assert!(!log.is_empty());

        let confirmation = log.reset();
        assert_eq!(confirmation, RESET_CONFIRMATION);
        assert!(log.is_empty());
    }

    #[test]
    fn snapshot_does_not_observe_later_appends() {
        let log = ConversationLog::new();
        log.append_user("before");

        let snapshot = log.snapshot();
        log.append_user("after");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clones_share_history() {
        let log = ConversationLog::new();
        let other = log.clone();

        log.append_user("shared");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn reset_command_detection() {
        assert!(is_reset_command("RESET"));
        assert!(is_reset_command("reset"));
        assert!(is_reset_command("  Reset \n"));
        assert!(!is_reset_command("reset please"));
        assert!(!is_reset_command("presets"));
    }
}
