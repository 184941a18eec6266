//! Tool-routing assistant core for pony-express.
//!
//! This crate turns one inbound text message into a reply: it checks for
//! the reset command, enriches recognized links, invokes the language
//! model with the running conversation and a fixed toolset, and executes
//! the resulting action (plain reply, note, or reminder).

pub mod backend;
pub mod error;
pub mod note;
pub mod preamble;
pub mod router;
pub mod toolset;

pub use backend::{ChatBackend, ChatMessage, ChatRole, Completion, CompletionRequest, ToolCall};
pub use error::{BackendError, NoteError, RouterError};
pub use note::{FileNoteStore, Note, NoteStore};
pub use preamble::build_preamble;
pub use router::{APOLOGY, Action, Assistant, FALLBACK_REPLY, ModelParams};
pub use toolset::{
    SET_REMINDER, SetReminderArgs, TAKE_NOTE, TakeNoteArgs, ToolSpec, toolset,
};
