//! Link pattern detection.
//!
//! Recognizes the two URL shapes the enricher knows how to expand:
//! YouTube video links and arXiv paper links.

use regex::Regex;
use std::sync::LazyLock;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid")
});

static PAPER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"arxiv\.org/(?:abs|pdf)/([0-9]+\.[0-9]+)").expect("paper id pattern is valid")
});

/// Returns true if the message mentions a YouTube host.
#[must_use]
pub fn mentions_video(message: &str) -> bool {
    message.contains("youtube.com") || message.contains("youtu.be")
}

/// Returns true if the message mentions the arXiv host.
#[must_use]
pub fn mentions_paper(message: &str) -> bool {
    message.contains("arxiv.org")
}

/// Extracts an 11-character video identifier from a message.
///
/// The identifier must immediately follow a `v=` query parameter or a
/// path separator. Trailing path or query content is ignored.
#[must_use]
pub fn extract_video_id(message: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts an arXiv paper identifier (`NNNN.NNNN`) from a message.
///
/// The identifier must follow `/abs/` or `/pdf/` on an arxiv.org URL.
#[must_use]
pub fn extract_paper_id(message: &str) -> Option<&str> {
    PAPER_ID_RE
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
