//! Error types for the assistant crate.
//!
//! - `BackendError`: low-level model backend failures
//! - `NoteError`: note slot write failures
//! - `RouterError`: anything that prevents deriving or executing an
//!   action; converted to a fixed apology string at the boundary

use std::fmt;

/// Errors from the model backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request to the provider failed.
    RequestFailed { reason: String },
    /// The provider's response could not be parsed.
    ResponseParseFailed { reason: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => write!(f, "model request failed: {reason}"),
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse model response: {reason}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Errors from the note slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// Writing the slot failed.
    WriteFailed { reason: String },
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { reason } => write!(f, "note write failed: {reason}"),
        }
    }
}

impl std::error::Error for NoteError {}

/// Errors while routing one model invocation to an action.
///
/// Router errors never propagate to the caller as raw failures: the
/// user receives a fixed apology and the conversation keeps the user
/// turn with no assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The model invocation failed.
    Backend(BackendError),
    /// Tool arguments did not match the declared schema.
    MalformedArguments { tool: String, reason: String },
    /// The model called a tool the router does not declare.
    UnrecognizedTool { name: String },
    /// The reminder time did not parse as an absolute instant.
    InvalidReminderTime { value: String, reason: String },
    /// Persisting the note failed.
    Note(NoteError),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "{e}"),
            Self::MalformedArguments { tool, reason } => {
                write!(f, "malformed arguments for tool '{tool}': {reason}")
            }
            Self::UnrecognizedTool { name } => write!(f, "unrecognized tool: {name}"),
            Self::InvalidReminderTime { value, reason } => {
                write!(f, "invalid reminder time '{value}': {reason}")
            }
            Self::Note(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<BackendError> for RouterError {
    fn from(e: BackendError) -> Self {
        Self::Backend(e)
    }
}

impl From<NoteError> for RouterError {
    fn from(e: NoteError) -> Self {
        Self::Note(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let err = BackendError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn router_error_display() {
        let err = RouterError::UnrecognizedTool {
            name: "send_pigeon".to_string(),
        };
        assert!(err.to_string().contains("send_pigeon"));

        let err = RouterError::InvalidReminderTime {
            value: "tomorrowish".to_string(),
            reason: "not ISO 8601".to_string(),
        };
        assert!(err.to_string().contains("tomorrowish"));
    }
}
