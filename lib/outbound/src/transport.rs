//! Outbound transport collaborator.

use async_trait::async_trait;

/// Errors from the outbound transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The provider rejected or failed the send.
    SendFailed { reason: String },
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SendFailed { reason } => write!(f, "transport send failed: {reason}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Sends one message body to the configured recipient.
///
/// The sender and recipient numbers are fixed configuration of the
/// implementation. Implementations must be safe to call concurrently:
/// reminder firings and the request path share one transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a body, returning the provider's message identifier.
    async fn send(&self, body: &str) -> Result<String, TransportError>;
}
