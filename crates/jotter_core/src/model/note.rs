//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by the store.
//! - Validate title/content before a note may enter the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` and `content` are stored trimmed and never empty.
//! - `created_at` is fixed at creation and survives updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Serializes as the hyphenated string form, so the persisted blob sees an
/// opaque string token.
pub type NoteId = Uuid;

/// Validation failure for note field contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Content is empty or whitespace-only after trimming.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty or whitespace-only"),
            Self::EmptyContent => write!(f, "note content must not be empty or whitespace-only"),
        }
    }
}

impl Error for NoteValidationError {}

/// The persisted note entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for lookups and navigation paths.
    pub id: NoteId,
    /// Short display title, stored trimmed.
    pub title: String,
    /// Free-form body text, stored trimmed.
    pub content: String,
    /// Creation instant, serialized as an ISO-8601 string.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with a generated id and `created_at` stamped now.
    ///
    /// Trims both fields and rejects empty/whitespace-only input before any
    /// identity is assigned.
    pub fn new(title: &str, content: &str) -> Result<Self, NoteValidationError> {
        Self::with_parts(Uuid::new_v4(), title, content, Utc::now())
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by decode and update paths where identity already exists.
    pub fn with_parts(
        id: NoteId,
        title: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, NoteValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }

    /// Checks stored-field invariants.
    ///
    /// Decode paths call this so invalid persisted state is rejected instead
    /// of masked.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Returns whether `query` matches title or content case-insensitively.
    ///
    /// A blank query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}
