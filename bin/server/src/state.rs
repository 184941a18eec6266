//! Shared handler state.

use async_trait::async_trait;
use pony_express_assistant::Assistant;
use pony_express_outbound::Dispatcher;
use pony_express_scheduler::ReminderSink;
use std::sync::Arc;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The assistant core.
    pub assistant: Arc<Assistant>,
    /// Chunked outbound delivery.
    pub dispatcher: Dispatcher,
}

/// Routes fired reminders through the outbound dispatcher, so reminder
/// texts get the same chunking and delivery path as replies.
pub struct DispatcherSink {
    dispatcher: Dispatcher,
}

impl DispatcherSink {
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ReminderSink for DispatcherSink {
    async fn deliver(&self, message: &str) {
        let receipts = self.dispatcher.send(message).await;
        let failures = receipts.iter().filter(|r| !r.success).count();
        if failures > 0 {
            tracing::warn!(failures, "reminder delivery partially failed");
        } else {
            tracing::info!(chunks = receipts.len(), "reminder delivered");
        }
    }
}
