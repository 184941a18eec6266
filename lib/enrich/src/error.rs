//! Error types for the enrichment crate.
//!
//! - `SourceError`: collaborator-level fetch/parse failures
//! - `EnrichError`: enrichment failures surfaced to the user as fixed
//!   natural-language strings, short-circuiting before the model call

use std::fmt;

/// Errors from content source collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A network fetch failed.
    FetchFailed { reason: String },
    /// The fetched payload could not be parsed.
    ParseFailed { reason: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed { reason } => write!(f, "content fetch failed: {reason}"),
            Self::ParseFailed { reason } => write!(f, "content parse failed: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Errors from enrichment.
///
/// An enrichment failure is terminal for the request: the message never
/// reaches the model, and `user_message` is sent back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichError {
    /// Transcript fetch failed for a recognized video link.
    TranscriptUnavailable { video_id: String, reason: String },
    /// Downloading the paper document failed.
    PaperDownloadFailed { paper_id: String, reason: String },
    /// Extracting text from the downloaded document failed.
    PaperExtractFailed { paper_id: String, reason: String },
}

impl EnrichError {
    /// The text sent to the user in place of an assistant reply.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TranscriptUnavailable { reason, .. } => {
                format!("Error retrieving transcript: {reason}")
            }
            Self::PaperDownloadFailed { .. } => "Error downloading the ArXiv PDF.".to_string(),
            Self::PaperExtractFailed { .. } => {
                "Error extracting text from the ArXiv PDF.".to_string()
            }
        }
    }
}

impl fmt::Display for EnrichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranscriptUnavailable { video_id, reason } => {
                write!(f, "transcript unavailable for video {video_id}: {reason}")
            }
            Self::PaperDownloadFailed { paper_id, reason } => {
                write!(f, "download failed for paper {paper_id}: {reason}")
            }
            Self::PaperExtractFailed { paper_id, reason } => {
                write!(f, "text extraction failed for paper {paper_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for EnrichError {}
