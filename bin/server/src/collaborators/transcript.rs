//! Video transcript client over the timedtext caption endpoint.

use async_trait::async_trait;
use pony_express_enrich::{SourceError, TranscriptSegment, TranscriptSource};
use serde::Deserialize;

const TIMEDTEXT_URL: &str = "https://video.google.com/timedtext";

/// Fetches English captions in `json3` format.
///
/// Caption endpoints often refuse datacenter addresses, so this client
/// takes its own `reqwest::Client`, which the server builds with a
/// forward proxy when one is configured.
pub struct TimedTextClient {
    http: reqwest::Client,
}

impl TimedTextClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[derive(Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

impl TimedTextEvent {
    fn into_segment(self) -> Option<TranscriptSegment> {
        let text: String = self.segs.into_iter().map(|seg| seg.utf8).collect();
        let text = text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        Some(TranscriptSegment {
            text,
            start_secs: self.start_ms as f64 / 1000.0,
            duration_secs: self.duration_ms as f64 / 1000.0,
        })
    }
}

#[async_trait]
impl TranscriptSource for TimedTextClient {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, SourceError> {
        let response = self
            .http
            .get(TIMEDTEXT_URL)
            .query(&[("lang", "en"), ("v", video_id), ("fmt", "json3")])
            .send()
            .await
            .map_err(|e| SourceError::FetchFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::FetchFailed {
                reason: format!("caption endpoint returned status {status}"),
            });
        }

        let raw = response.text().await.map_err(|e| SourceError::FetchFailed {
            reason: e.to_string(),
        })?;

        // The endpoint answers 200 with an empty body when no English
        // track exists.
        if raw.trim().is_empty() {
            return Err(SourceError::FetchFailed {
                reason: "no English captions available".to_string(),
            });
        }

        let parsed: TimedText =
            serde_json::from_str(&raw).map_err(|e| SourceError::ParseFailed {
                reason: e.to_string(),
            })?;

        let segments: Vec<TranscriptSegment> = parsed
            .events
            .into_iter()
            .filter_map(TimedTextEvent::into_segment)
            .collect();

        if segments.is_empty() {
            return Err(SourceError::ParseFailed {
                reason: "caption track carried no text".to_string(),
            });
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_collapse_segs_and_drop_empty() {
        let raw = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 1500, "segs": [{"utf8": "hello "}, {"utf8": "world"}]},
                {"tStartMs": 1500, "dDurationMs": 500, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 2000, "dDurationMs": 1000, "segs": [{"utf8": "again"}]}
            ]
        }"#;
        let parsed: TimedText = serde_json::from_str(raw).expect("deserialize");
        let segments: Vec<TranscriptSegment> = parsed
            .events
            .into_iter()
            .filter_map(TimedTextEvent::into_segment)
            .collect();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "hello world");
        assert!((segments[0].start_secs - 0.0).abs() < f64::EPSILON);
        assert!((segments[0].duration_secs - 1.5).abs() < f64::EPSILON);
        assert_eq!(segments[1].text, "again");
        assert!((segments[1].start_secs - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_default() {
        let raw = r#"{"events": [{"segs": [{"utf8": "x"}]}]}"#;
        let parsed: TimedText = serde_json::from_str(raw).expect("deserialize");
        let segment = parsed.events.into_iter().next().and_then(TimedTextEvent::into_segment);
        let segment = segment.expect("segment");
        assert_eq!(segment.text, "x");
        assert!((segment.start_secs - 0.0).abs() < f64::EPSILON);
    }
}
