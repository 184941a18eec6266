//! The enricher: replaces a message with extracted external content.

use crate::error::EnrichError;
use crate::link;
use crate::source::{PaperSource, TextExtractor, TranscriptSource};
use std::sync::Arc;

/// Replaces recognized links in a message with the content they point at.
///
/// Exactly one enrichment path runs per message: the video check precedes
/// the paper check, and the first match wins. A message with no recognized
/// link passes through unchanged.
pub struct Enricher {
    transcripts: Arc<dyn TranscriptSource>,
    papers: Arc<dyn PaperSource>,
    extractor: Arc<dyn TextExtractor>,
}

impl Enricher {
    /// Creates an enricher from its content source collaborators.
    #[must_use]
    pub fn new(
        transcripts: Arc<dyn TranscriptSource>,
        papers: Arc<dyn PaperSource>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            transcripts,
            papers,
            extractor,
        }
    }

    /// Enriches a message, or passes it through unchanged.
    ///
    /// # Errors
    ///
    /// Returns an `EnrichError` when a recognized link's content cannot be
    /// fetched or extracted. The error short-circuits the request: its
    /// `user_message` goes back to the sender instead of a model reply.
    pub async fn enrich(&self, message: &str) -> Result<String, EnrichError> {
        if link::mentions_video(message) {
            if let Some(video_id) = link::extract_video_id(message) {
                return self.enrich_video(video_id).await;
            }
            // Host mentioned but no identifier found: pass through.
            return Ok(message.to_string());
        }

        if link::mentions_paper(message) {
            if let Some(paper_id) = link::extract_paper_id(message) {
                return self.enrich_paper(paper_id).await;
            }
            return Ok(message.to_string());
        }

        Ok(message.to_string())
    }

    async fn enrich_video(&self, video_id: &str) -> Result<String, EnrichError> {
        let segments = self.transcripts.fetch(video_id).await.map_err(|e| {
            tracing::warn!(video_id, error = %e, "transcript fetch failed");
            EnrichError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let text = segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(video_id, segments = segments.len(), "inlined transcript");
        Ok(format!("Transcript of the video: {text}"))
    }

    async fn enrich_paper(&self, paper_id: &str) -> Result<String, EnrichError> {
        let bytes = self.papers.download(paper_id).await.map_err(|e| {
            tracing::warn!(paper_id, error = %e, "paper download failed");
            EnrichError::PaperDownloadFailed {
                paper_id: paper_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let text = self.extractor.extract(bytes).await.map_err(|e| {
            tracing::warn!(paper_id, error = %e, "paper text extraction failed");
            EnrichError::PaperExtractFailed {
                paper_id: paper_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(paper_id, chars = text.len(), "inlined paper text");
        Ok(format!("Full text of the ArXiv paper: {text}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::source::TranscriptSegment;
    use async_trait::async_trait;

    struct FixedTranscripts(Result<Vec<TranscriptSegment>, SourceError>);

    #[async_trait]
    impl TranscriptSource for FixedTranscripts {
        async fn fetch(&self, _video_id: &str) -> Result<Vec<TranscriptSegment>, SourceError> {
            self.0.clone()
        }
    }

    struct FixedPapers(Result<Vec<u8>, SourceError>);

    #[async_trait]
    impl PaperSource for FixedPapers {
        async fn download(&self, _paper_id: &str) -> Result<Vec<u8>, SourceError> {
            self.0.clone()
        }
    }

    struct FixedExtractor(Result<String, SourceError>);

    #[async_trait]
    impl TextExtractor for FixedExtractor {
        async fn extract(&self, _data: Vec<u8>) -> Result<String, SourceError> {
            self.0.clone()
        }
    }

    fn enricher(
        transcripts: FixedTranscripts,
        papers: FixedPapers,
        extractor: FixedExtractor,
    ) -> Enricher {
        Enricher::new(Arc::new(transcripts), Arc::new(papers), Arc::new(extractor))
    }

    fn working_enricher() -> Enricher {
        enricher(
            FixedTranscripts(Ok(vec![
                TranscriptSegment::text_only("hello"),
                TranscriptSegment::text_only("world"),
            ])),
            FixedPapers(Ok(b"%PDF-1.4".to_vec())),
            FixedExtractor(Ok("Attention is all you need.".to_string())),
        )
    }

    #[tokio::test]
    async fn plain_message_passes_through() {
        let result = working_enricher()
            .enrich("what's the weather tomorrow?")
            .await
            .expect("no enrichment should succeed");
        assert_eq!(result, "what's the weather tomorrow?");
    }

    #[tokio::test]
    async fn video_link_becomes_transcript() {
        let result = working_enricher()
            .enrich("https://youtube.com/watch?v=ABCDEFGHIJK")
            .await
            .expect("transcript should succeed");
        assert_eq!(result, "Transcript of the video: hello world");
    }

    #[tokio::test]
    async fn video_host_without_id_passes_through() {
        let message = "I was on youtube.com all day";
        let result = working_enricher().enrich(message).await.expect("no-op");
        assert_eq!(result, message);
    }

    #[tokio::test]
    async fn transcript_failure_surfaces_reason() {
        let e = enricher(
            FixedTranscripts(Err(SourceError::FetchFailed {
                reason: "no captions".to_string(),
            })),
            FixedPapers(Ok(Vec::new())),
            FixedExtractor(Ok(String::new())),
        );

        let err = e
            .enrich("https://youtube.com/watch?v=ABCDEFGHIJK")
            .await
            .expect_err("fetch failure should propagate");
        assert!(err.user_message().starts_with("Error retrieving transcript:"));
    }

    #[tokio::test]
    async fn paper_link_becomes_full_text() {
        let result = working_enricher()
            .enrich("summarize https://arxiv.org/abs/1706.03762")
            .await
            .expect("paper enrichment should succeed");
        assert_eq!(
            result,
            "Full text of the ArXiv paper: Attention is all you need."
        );
    }

    #[tokio::test]
    async fn paper_download_failure_is_fixed_string() {
        let e = enricher(
            FixedTranscripts(Ok(Vec::new())),
            FixedPapers(Err(SourceError::FetchFailed {
                reason: "timeout".to_string(),
            })),
            FixedExtractor(Ok(String::new())),
        );

        let err = e
            .enrich("https://arxiv.org/pdf/2401.01234")
            .await
            .expect_err("download failure should propagate");
        assert_eq!(err.user_message(), "Error downloading the ArXiv PDF.");
    }

    #[tokio::test]
    async fn paper_extract_failure_is_fixed_string() {
        let e = enricher(
            FixedTranscripts(Ok(Vec::new())),
            FixedPapers(Ok(b"not a pdf".to_vec())),
            FixedExtractor(Err(SourceError::ParseFailed {
                reason: "bad xref table".to_string(),
            })),
        );

        let err = e
            .enrich("https://arxiv.org/abs/2401.01234")
            .await
            .expect_err("extraction failure should propagate");
        assert_eq!(
            err.user_message(),
            "Error extracting text from the ArXiv PDF."
        );
    }

    #[tokio::test]
    async fn video_check_precedes_paper_check() {
        // Both hosts present: the video path wins and the paper sources
        // are never consulted.
        let e = enricher(
            FixedTranscripts(Ok(vec![TranscriptSegment::text_only("talk")])),
            FixedPapers(Err(SourceError::FetchFailed {
                reason: "should not be called".to_string(),
            })),
            FixedExtractor(Ok(String::new())),
        );

        let result = e
            .enrich("youtube.com/watch?v=ABCDEFGHIJK and arxiv.org/abs/2401.01234")
            .await
            .expect("video path should win");
        assert_eq!(result, "Transcript of the video: talk");
    }
}
