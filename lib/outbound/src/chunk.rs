//! Reply chunking.
//!
//! The transport caps message bodies, so long replies are split into
//! ordered chunks. Cuts prefer the nearest whitespace behind the limit
//! to avoid splitting mid-word.

/// Maximum characters per outbound chunk.
pub const MAX_CHUNK_LEN: usize = 1400;

/// Splits a message into chunks of at most `max_len` characters.
///
/// For each boundary the cut point is the last whitespace within the
/// first `max_len` characters of the remainder; with no whitespace the
/// cut is exactly at `max_len`. Leading whitespace of the remainder is
/// trimmed before continuing. Counts are characters, not bytes, and
/// cuts always land on character boundaries.
#[must_use]
pub fn split_message(message: &str, max_len: usize) -> Vec<String> {
    assert!(max_len > 0, "chunk length must be positive");

    let mut chunks = Vec::new();
    let mut rest = message;

    while !rest.is_empty() {
        // Byte offset of the character just past the limit, if any.
        let Some((limit, _)) = rest.char_indices().nth(max_len) else {
            chunks.push(rest.to_string());
            break;
        };

        let head = &rest[..limit];
        let cut = head
            .rfind(|c: char| c.is_whitespace())
            .unwrap_or(limit);

        let chunk = &rest[..cut];
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        rest = rest[cut..].trim_start();
    }

    chunks
}
