//! Model backend abstraction.
//!
//! The router depends only on this contract: messages plus a toolset in,
//! free text or tool calls out. The concrete provider client lives in
//! the server binary.

use crate::error::BackendError;
use crate::toolset::ToolSpec;
use async_trait::async_trait;
use pony_express_conversation::{Message, MessageRole};
use serde::{Deserialize, Serialize};

/// The role of a chat message sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Synthesized instructions.
    System,
    /// User/human turn.
    User,
    /// Assistant turn.
    Assistant,
}

/// One message in a model invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender role.
    pub role: ChatRole,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::User => ChatRole::User,
            MessageRole::Assistant => ChatRole::Assistant,
            MessageRole::System => ChatRole::System,
        };
        Self {
            role,
            content: message.content.clone(),
        }
    }
}

/// A request to the model.
///
/// Built fresh per inbound message; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// System preamble followed by the full conversation snapshot.
    pub messages: Vec<ChatMessage>,
    /// Tools the model may call.
    pub tools: Vec<ToolSpec>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A tool call proposed by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Declared tool name.
    pub name: String,
    /// Raw JSON argument payload.
    pub arguments: String,
}

impl ToolCall {
    /// Creates a tool call.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// The model's response to one invocation.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Free text content, if the model produced any.
    pub content: Option<String>,
    /// Tool calls, in the order the model proposed them.
    pub tool_calls: Vec<ToolCall>,
}

impl Completion {
    /// Creates a text-only completion.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// Creates a completion consisting of one tool call.
    #[must_use]
    pub fn tool_call(call: ToolCall) -> Self {
        Self {
            content: None,
            tool_calls: vec![call],
        }
    }
}

/// Trait for model backends.
///
/// A single attempt per invocation: the router never retries.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Runs one model invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails or its response
    /// cannot be interpreted.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_from_conversation_message() {
        let msg = Message::user("hello");
        let chat: ChatMessage = (&msg).into();
        assert_eq!(chat.role, ChatRole::User);
        assert_eq!(chat.content, "hello");
    }

    #[test]
    fn chat_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatRole::System).expect("serialize");
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn completion_constructors() {
        let text = Completion::text("hi");
        assert_eq!(text.content.as_deref(), Some("hi"));
        assert!(text.tool_calls.is_empty());

        let call = Completion::tool_call(ToolCall::new("take_note", "{}"));
        assert!(call.content.is_none());
        assert_eq!(call.tool_calls.len(), 1);
    }
}
