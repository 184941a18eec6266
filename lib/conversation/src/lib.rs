//! Conversation history for the pony-express texting assistant.
//!
//! This crate provides:
//!
//! - **Message**: role-tagged, immutable conversation entries
//! - **ConversationLog**: the shared, append-only history with reset support

pub mod log;
pub mod message;

pub use log::{ConversationLog, RESET_CONFIRMATION, is_reset_command};
pub use message::{Message, MessageRole};
