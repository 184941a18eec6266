//! arXiv paper download and PDF text extraction.

use async_trait::async_trait;
use pony_express_enrich::{PaperSource, SourceError, TextExtractor};

/// Downloads paper PDFs from arxiv.org by identifier.
pub struct ArxivClient {
    http: reqwest::Client,
}

impl ArxivClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn download(&self, paper_id: &str) -> Result<Vec<u8>, SourceError> {
        let url = format!("https://arxiv.org/pdf/{paper_id}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::FetchFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::FetchFailed {
                reason: format!("{url} returned status {status}"),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::FetchFailed {
                reason: e.to_string(),
            })?;

        Ok(bytes.to_vec())
    }
}

/// Extracts text from PDF bytes with `pdf-extract`.
///
/// Extraction is CPU-bound and runs on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Vec<u8>) -> Result<String, SourceError> {
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| SourceError::ParseFailed {
                reason: format!("extraction task failed: {e}"),
            })?
            .map_err(|e| SourceError::ParseFailed {
                reason: e.to_string(),
            })?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extractor_rejects_non_pdf_bytes() {
        let extractor = PdfTextExtractor;
        let result = extractor.extract(b"not a pdf".to_vec()).await;
        assert!(matches!(result, Err(SourceError::ParseFailed { .. })));
    }
}
