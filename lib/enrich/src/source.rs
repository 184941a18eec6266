//! Content source collaborators.
//!
//! Concrete implementations (transcript endpoint, arXiv fetch, PDF text
//! extraction) live in the server binary; the enricher depends only on
//! these traits.

use crate::error::SourceError;
use async_trait::async_trait;

/// One segment of a video transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    /// Spoken text of the segment.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start_secs: f64,
    /// Duration of the segment, in seconds.
    pub duration_secs: f64,
}

impl TranscriptSegment {
    /// Creates a segment with no timing information.
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start_secs: 0.0,
            duration_secs: 0.0,
        }
    }
}

/// Fetches the transcript for a video by its identifier.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Returns the ordered transcript segments for the video.
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, SourceError>;
}

/// Downloads a paper document by its identifier.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Returns the raw document bytes.
    async fn download(&self, paper_id: &str) -> Result<Vec<u8>, SourceError>;
}

/// Extracts text from a downloaded document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document text, all pages concatenated in page order.
    async fn extract(&self, data: Vec<u8>) -> Result<String, SourceError>;
}
