//! The fixed toolset exposed to the model.
//!
//! Exactly two tools: `take_note` and `set_reminder`. Both declare every
//! field as required and reject unknown fields, both in the JSON schema
//! sent to the model and in the serde argument types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Name of the note-taking tool.
pub const TAKE_NOTE: &str = "take_note";

/// Name of the reminder tool.
pub const SET_REMINDER: &str = "set_reminder";

/// A tool declaration sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON schema for the arguments.
    pub parameters: JsonValue,
}

/// Arguments for `take_note`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TakeNoteArgs {
    /// Title of the note.
    pub title: String,
    /// Content of the note.
    pub note: String,
    /// When the note was made, ISO 8601.
    pub time: String,
}

/// Arguments for `set_reminder`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetReminderArgs {
    /// The text of the reminder.
    pub reminder_text: String,
    /// The time for the reminder, ISO 8601.
    pub reminder_time: String,
}

/// Returns the complete toolset for one model invocation.
#[must_use]
pub fn toolset() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: TAKE_NOTE.to_string(),
            description: "Write down a note the user asked to remember".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "required": ["title", "note", "time"],
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Title of the note"
                    },
                    "note": {
                        "type": "string",
                        "description": "Content of the note"
                    },
                    "time": {
                        "type": "string",
                        "description": "Timestamp of when the note was made, in ISO 8601 format"
                    }
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            name: SET_REMINDER.to_string(),
            description: "Set a reminder for a specific date and time".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "required": ["reminder_text", "reminder_time"],
                "properties": {
                    "reminder_text": {
                        "type": "string",
                        "description": "The text of the reminder"
                    },
                    "reminder_time": {
                        "type": "string",
                        "description": "The time for the reminder in ISO 8601 format"
                    }
                },
                "additionalProperties": false
            }),
        },
    ]
}
