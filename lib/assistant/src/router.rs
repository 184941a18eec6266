//! The tool router: one inbound message in, one reply out.
//!
//! Pipeline: reset check, enrichment, user-turn append, model call with
//! the fixed toolset, action execution, assistant-turn append. Failures
//! never escape as raw errors; the user always receives a short fixed
//! string.

use crate::backend::{ChatBackend, ChatMessage, Completion, CompletionRequest};
use crate::error::RouterError;
use crate::note::{Note, NoteStore};
use crate::preamble::build_preamble;
use crate::toolset::{SET_REMINDER, SetReminderArgs, TAKE_NOTE, TakeNoteArgs, toolset};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::America::Chicago;
use pony_express_conversation::{ConversationLog, is_reset_command};
use pony_express_enrich::Enricher;
use pony_express_scheduler::ReminderScheduler;
use std::sync::Arc;

/// Reply used when the model returned neither text nor a tool call.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that request.";

/// Reply used when anything in the routing pipeline fails.
pub const APOLOGY: &str =
    "I'm sorry, I'm having trouble processing your request right now. Please try again later.";

/// Sampling parameters for the model invocation.
#[derive(Debug, Clone)]
pub struct ModelParams {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o-2024-08-06".to_string(),
            temperature: 1.0,
            max_tokens: 8000,
        }
    }
}

/// The typed action derived from one model invocation.
///
/// Exactly one action results per invocation. When the model proposes
/// several tool calls, only the first is honored; the rest are
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send the text back as-is.
    Reply(String),
    /// Overwrite the note slot.
    Note(Note),
    /// Schedule a one-shot reminder.
    Reminder {
        /// Text delivered when the reminder fires.
        text: String,
        /// Absolute firing instant.
        fire_at: DateTime<Utc>,
    },
}

/// The texting assistant core.
pub struct Assistant {
    conversation: ConversationLog,
    enricher: Enricher,
    backend: Arc<dyn ChatBackend>,
    notes: Arc<dyn NoteStore>,
    reminders: ReminderScheduler,
    params: ModelParams,
    // Serializes inbound processing: the append-user, snapshot, model
    // call, append-assistant sequence must not interleave across
    // requests. Reminder firings run outside this lock.
    gate: tokio::sync::Mutex<()>,
}

impl Assistant {
    /// Creates an assistant from its collaborators.
    #[must_use]
    pub fn new(
        conversation: ConversationLog,
        enricher: Enricher,
        backend: Arc<dyn ChatBackend>,
        notes: Arc<dyn NoteStore>,
        reminders: ReminderScheduler,
    ) -> Self {
        Self {
            conversation,
            enricher,
            backend,
            notes,
            reminders,
            params: ModelParams::default(),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Overrides the model parameters.
    #[must_use]
    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    /// Handle of the shared conversation log.
    #[must_use]
    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    /// Turns one inbound message into the reply text.
    ///
    /// At most one inbound message is processed at a time against the
    /// shared conversation; concurrent calls queue here.
    ///
    /// Never fails outward: enrichment errors surface as their fixed
    /// user-facing strings, and routing errors as the fixed apology.
    pub async fn handle_message(&self, incoming: &str) -> String {
        let _processing = self.gate.lock().await;

        if is_reset_command(incoming) {
            tracing::info!("conversation reset requested");
            return self.conversation.reset().to_string();
        }

        let enriched = match self.enricher.enrich(incoming).await {
            Ok(message) => message,
            Err(e) => {
                // Enrichment failures short-circuit before the model
                // call; the user turn is still recorded.
                self.conversation.append_user(incoming);
                return e.user_message();
            }
        };
        self.conversation.append_user(enriched);

        match self.route().await {
            Ok(reply) => {
                self.conversation.append_assistant(reply.clone());
                reply
            }
            Err(e) => {
                tracing::error!(error = %e, "routing failed");
                APOLOGY.to_string()
            }
        }
    }

    /// Runs one model invocation against the current snapshot and
    /// executes the resulting action.
    async fn route(&self) -> Result<String, RouterError> {
        let snapshot = self.conversation.snapshot();

        let mut messages = Vec::with_capacity(snapshot.len() + 1);
        messages.push(ChatMessage::system(build_preamble(Utc::now())));
        messages.extend(snapshot.iter().map(ChatMessage::from));

        let request = CompletionRequest {
            model: self.params.model.clone(),
            messages,
            tools: toolset(),
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        };

        let completion = self.backend.complete(&request).await?;
        let action = derive_action(&completion)?;
        self.execute(action).await
    }

    async fn execute(&self, action: Action) -> Result<String, RouterError> {
        match action {
            Action::Reply(text) => Ok(text),
            Action::Note(note) => {
                self.notes.replace(&note).await?;
                Ok(format!("Note saved successfully.\n\n{}", note.note))
            }
            Action::Reminder { text, fire_at } => {
                let reminder_id = self.reminders.schedule(text.clone(), fire_at);
                tracing::info!(reminder_id = %reminder_id, "reminder action executed");
                Ok(format!(
                    "Reminder set for {}: {text}",
                    format_chicago(fire_at)
                ))
            }
        }
    }
}

/// Derives the single action from a model completion.
///
/// Only the first tool call is honored; with no tool call the text
/// content becomes a plain reply, with a fixed fallback when the model
/// produced no text at all.
pub fn derive_action(completion: &Completion) -> Result<Action, RouterError> {
    let Some(call) = completion.tool_calls.first() else {
        let text = completion
            .content
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());
        return Ok(Action::Reply(text));
    };

    if completion.tool_calls.len() > 1 {
        tracing::debug!(
            discarded = completion.tool_calls.len() - 1,
            "honoring only the first tool call"
        );
    }

    match call.name.as_str() {
        TAKE_NOTE => {
            let args: TakeNoteArgs =
                serde_json::from_str(&call.arguments).map_err(|e| {
                    RouterError::MalformedArguments {
                        tool: TAKE_NOTE.to_string(),
                        reason: e.to_string(),
                    }
                })?;
            Ok(Action::Note(Note {
                title: args.title,
                note: args.note,
                time: args.time,
            }))
        }
        SET_REMINDER => {
            let args: SetReminderArgs =
                serde_json::from_str(&call.arguments).map_err(|e| {
                    RouterError::MalformedArguments {
                        tool: SET_REMINDER.to_string(),
                        reason: e.to_string(),
                    }
                })?;
            let fire_at = parse_reminder_time(&args.reminder_time)?;
            Ok(Action::Reminder {
                text: args.reminder_text,
                fire_at,
            })
        }
        other => Err(RouterError::UnrecognizedTool {
            name: other.to_string(),
        }),
    }
}

/// Parses a reminder time as an absolute instant.
///
/// Offset-carrying ISO 8601 is taken as-is; a zone-naive timestamp is
/// assumed to be in the assistant's home zone (America/Chicago).
pub fn parse_reminder_time(value: &str) -> Result<DateTime<Utc>, RouterError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|e| RouterError::InvalidReminderTime {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    naive
        .and_local_timezone(Chicago)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| RouterError::InvalidReminderTime {
            value: value.to_string(),
            reason: "no valid local time in America/Chicago".to_string(),
        })
}

/// Formats an instant for the reminder confirmation, in the home zone.
#[must_use]
pub fn format_chicago(instant: DateTime<Utc>) -> String {
    format!("{} CST", instant.with_timezone(&Chicago).format("%m/%d %I:%M %p"))
}
