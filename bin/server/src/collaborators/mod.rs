//! Concrete collaborator clients.
//!
//! The library crates define the seams (`ChatBackend`, content sources,
//! `Transport`); this module provides the HTTP implementations.

pub mod arxiv;
pub mod openai;
pub mod transcript;
pub mod twilio;

pub use arxiv::{ArxivClient, PdfTextExtractor};
pub use openai::OpenAiBackend;
pub use transcript::TimedTextClient;
pub use twilio::TwilioTransport;
