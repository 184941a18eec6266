//! Message enrichment for the pony-express texting assistant.
//!
//! This crate provides:
//!
//! - **Link detection**: recognizing video and paper URLs in a message
//! - **Content sources**: traits for transcript fetch, document download,
//!   and text extraction
//! - **Enricher**: replacing a message with extracted external content
//!   before it reaches the model

pub mod enricher;
pub mod error;
pub mod link;
pub mod source;

pub use enricher::Enricher;
pub use error::{EnrichError, SourceError};
pub use link::{extract_paper_id, extract_video_id};
pub use source::{PaperSource, TextExtractor, TranscriptSegment, TranscriptSource};
