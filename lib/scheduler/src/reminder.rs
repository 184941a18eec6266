//! One-shot reminder timers.
//!
//! Each scheduled reminder runs on its own tokio task: firings are
//! independent, never block one another, and never block the request
//! path. A reminder fires at most once and is discarded afterward.
//! There is no cancellation or rescheduling.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pony_express_core::ReminderId;
use std::sync::Arc;

/// A reminder waiting to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    /// Unique reminder identifier.
    pub id: ReminderId,
    /// Text delivered when the reminder fires.
    pub text: String,
    /// Absolute instant at which the reminder fires.
    pub fire_at: DateTime<Utc>,
}

/// Receives the outbound message produced by a firing.
///
/// Implementations must be safe to call concurrently: multiple timers may
/// fire at the same time as the main request path.
#[async_trait]
pub trait ReminderSink: Send + Sync {
    /// Delivers a reminder message to the user.
    async fn deliver(&self, message: &str);
}

/// Schedules one-shot reminder firings.
#[derive(Clone)]
pub struct ReminderScheduler {
    sink: Arc<dyn ReminderSink>,
}

impl ReminderScheduler {
    /// Creates a scheduler delivering firings into the given sink.
    #[must_use]
    pub fn new(sink: Arc<dyn ReminderSink>) -> Self {
        Self { sink }
    }

    /// Schedules a single future firing.
    ///
    /// At `fire_at` the sink receives `"Reminder: "` followed by the
    /// reminder text, exactly once. An instant in the past fires
    /// immediately. The scheduled entry is discarded after firing.
    pub fn schedule(&self, text: impl Into<String>, fire_at: DateTime<Utc>) -> ReminderId {
        let reminder = ScheduledReminder {
            id: ReminderId::new(),
            text: text.into(),
            fire_at,
        };
        let id = reminder.id;
        tracing::info!(reminder_id = %id, fire_at = %fire_at, "reminder scheduled");

        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let delay = (reminder.fire_at - Utc::now())
                .to_std()
                .unwrap_or(std::time::Duration::ZERO);
            tokio::time::sleep(delay).await;

            sink.deliver(&format!("Reminder: {}", reminder.text)).await;
            tracing::info!(reminder_id = %reminder.id, "reminder fired");
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct ChannelSink(mpsc::UnboundedSender<String>);

    #[async_trait]
    impl ReminderSink for ChannelSink {
        async fn deliver(&self, message: &str) {
            let _ = self.0.send(message.to_string());
        }
    }

    fn scheduler() -> (ReminderScheduler, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ReminderScheduler::new(Arc::new(ChannelSink(tx))), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_fires_with_prefix() {
        let (scheduler, mut rx) = scheduler();
        scheduler.schedule("call mom", Utc::now() + chrono::Duration::milliseconds(50));

        let message = rx.recv().await.expect("reminder should fire");
        assert_eq!(message, "Reminder: call mom");
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_does_not_fire_early() {
        let (scheduler, mut rx) = scheduler();
        scheduler.schedule("stretch", Utc::now() + chrono::Duration::seconds(3600));

        // Well before the fire time nothing has been delivered.
        tokio::time::timeout(Duration::from_millis(10), rx.recv())
            .await
            .expect_err("reminder must not fire before its instant");
    }

    #[tokio::test(start_paused = true)]
    async fn past_instant_fires_immediately() {
        let (scheduler, mut rx) = scheduler();
        scheduler.schedule("overdue", Utc::now() - chrono::Duration::seconds(30));

        let message = rx.recv().await.expect("overdue reminder should fire");
        assert_eq!(message, "Reminder: overdue");
    }

    #[tokio::test(start_paused = true)]
    async fn outstanding_reminders_fire_independently() {
        let (scheduler, mut rx) = scheduler();
        scheduler.schedule("first", Utc::now() + chrono::Duration::milliseconds(10));
        scheduler.schedule("second", Utc::now() + chrono::Duration::milliseconds(20));
        scheduler.schedule("third", Utc::now() + chrono::Duration::milliseconds(30));

        let mut fired = Vec::new();
        for _ in 0..3 {
            fired.push(rx.recv().await.expect("each reminder fires"));
        }
        fired.sort();
        assert_eq!(
            fired,
            vec![
                "Reminder: first".to_string(),
                "Reminder: second".to_string(),
                "Reminder: third".to_string(),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn each_reminder_fires_exactly_once() {
        let (scheduler, mut rx) = scheduler();
        scheduler.schedule("once", Utc::now() + chrono::Duration::milliseconds(5));

        assert_eq!(rx.recv().await, Some("Reminder: once".to_string()));
        tokio::time::timeout(Duration::from_secs(60), rx.recv())
            .await
            .expect_err("no second firing");
    }
}
