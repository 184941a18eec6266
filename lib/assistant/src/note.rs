//! The single-slot note store.
//!
//! Notes have no history: each saved note overwrites the previous one.
//! The slot is write-only from the core's perspective.

use crate::error::NoteError;
use async_trait::async_trait;
use std::path::PathBuf;

/// A note produced by the `take_note` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Title of the note.
    pub title: String,
    /// Content of the note.
    pub note: String,
    /// When the note was made, ISO 8601.
    pub time: String,
}

/// Persists notes into a single overwritable slot.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Replaces the slot's contents with this note.
    async fn replace(&self, note: &Note) -> Result<(), NoteError>;
}

/// A note store backed by one fixed file.
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    path: PathBuf,
}

impl FileNoteStore {
    /// Creates a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NoteStore for FileNoteStore {
    async fn replace(&self, note: &Note) -> Result<(), NoteError> {
        tokio::fs::write(&self.path, note.note.as_bytes())
            .await
            .map_err(|e| NoteError::WriteFailed {
                reason: e.to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), title = %note.title, "note slot replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str) -> Note {
        Note {
            title: "groceries".to_string(),
            note: body.to_string(),
            time: "2025-01-15T12:00:00-06:00".to_string(),
        }
    }

    #[tokio::test]
    async fn replace_writes_note_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("note.txt");
        let store = FileNoteStore::new(&path);

        store.replace(&note("milk and eggs")).await.expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "milk and eggs");
    }

    #[tokio::test]
    async fn replace_overwrites_previous_note() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("note.txt");
        let store = FileNoteStore::new(&path);

        store.replace(&note("first")).await.expect("write");
        store.replace(&note("second")).await.expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "second");
    }

    #[tokio::test]
    async fn unwritable_path_reports_error() {
        let store = FileNoteStore::new("/definitely/not/a/real/dir/note.txt");
        let err = store.replace(&note("lost")).await.expect_err("write fails");
        let NoteError::WriteFailed { reason } = err;
        assert!(!reason.is_empty());
    }
}
