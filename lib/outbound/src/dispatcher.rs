//! Ordered, failure-isolated chunk dispatch.

use crate::chunk::{MAX_CHUNK_LEN, split_message};
use crate::transport::Transport;
use pony_express_core::DeliveryId;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of sending one chunk.
///
/// Receipt order matches chunk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    /// Whether the chunk was accepted by the transport.
    pub success: bool,
    /// Provider message identifier, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Error description, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryReceipt {
    /// Creates a success receipt.
    #[must_use]
    pub fn sent(sid: impl Into<String>) -> Self {
        Self {
            success: true,
            sid: Some(sid.into()),
            error: None,
        }
    }

    /// Creates a failure receipt.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            sid: None,
            error: Some(error.into()),
        }
    }
}

/// Splits replies into chunks and sends them in order.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    max_chunk_len: usize,
}

impl Dispatcher {
    /// Creates a dispatcher with the default chunk length.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            max_chunk_len: MAX_CHUNK_LEN,
        }
    }

    /// Overrides the maximum chunk length.
    #[must_use]
    pub fn with_max_chunk_len(mut self, max_chunk_len: usize) -> Self {
        self.max_chunk_len = max_chunk_len;
        self
    }

    /// Sends a message, chunked, returning one receipt per chunk.
    ///
    /// Chunks go out strictly in order. A failed chunk is recorded in its
    /// receipt and does not abort the chunks after it.
    pub async fn send(&self, message: &str) -> Vec<DeliveryReceipt> {
        let delivery_id = DeliveryId::new();
        let chunks = split_message(message, self.max_chunk_len);
        let mut receipts = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            match self.transport.send(chunk).await {
                Ok(sid) => {
                    tracing::debug!(
                        delivery_id = %delivery_id,
                        sid = %sid,
                        chars = chunk.chars().count(),
                        "chunk sent"
                    );
                    receipts.push(DeliveryReceipt::sent(sid));
                }
                Err(e) => {
                    tracing::warn!(delivery_id = %delivery_id, error = %e, "chunk send failed");
                    receipts.push(DeliveryReceipt::failed(e.to_string()));
                }
            }
        }

        receipts
    }
}
