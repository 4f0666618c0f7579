//! The note store: CRUD, search and the persistence contract.
//!
//! # Responsibility
//! - Own the canonical note collection, loaded once at open.
//! - Persist the full collection after every successful mutation.
//! - Serve presentation-facing list/find queries.
//!
//! # Invariants
//! - `id` is unique across all notes held by the store.
//! - Stored titles/contents are trimmed and never empty.
//! - `update` preserves the original `created_at`, whatever the caller sent.
//! - `revision` increments exactly once per successful mutation.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::storage::{decode_notes, encode_notes, NoteStorage, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for mutation and persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected before any state changed.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NotFound(NoteId),
    /// Persistence-layer failure surfaced by [`NoteStore::persist`].
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Canonical owner of the note collection and its persistence delegate.
///
/// The collection is kept newest-first because `create` prepends; `list`
/// recomputes its presentation ordering per call and never reorders storage.
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn NoteStorage>,
    revision: u64,
}

impl NoteStore {
    /// Opens the store, loading the persisted collection once.
    ///
    /// Fails soft: an absent slot, an unreadable medium, or a corrupt blob
    /// all yield an empty collection. Corruption is logged at error level so
    /// it stays distinguishable from a first run.
    pub fn open(storage: Box<dyn NoteStorage>) -> Self {
        let notes = load_notes(storage.as_ref());
        info!(
            "event=store_open module=store status=ok count={}",
            notes.len()
        );
        Self {
            notes,
            storage,
            revision: 0,
        }
    }

    /// Creates a note from user input and persists the collection.
    ///
    /// New notes go to the front: most-recently-created-first is part of the
    /// store contract, not an accident of insertion. Validation failure is a
    /// no-op: nothing is created, nothing is saved.
    pub fn create(&mut self, title: &str, content: &str) -> Result<Note, NoteValidationError> {
        let note = Note::new(title, content)?;
        self.notes.insert(0, note.clone());
        self.commit("create");
        Ok(note)
    }

    /// Replaces an existing note in place and persists the collection.
    ///
    /// The original `created_at` is carried forward even when the caller
    /// supplies a different one; the store owns that invariant, not the
    /// caller. An unknown id is a `NotFound` no-op.
    pub fn update(&mut self, note: Note) -> StoreResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|existing| existing.id == note.id)
            .ok_or(StoreError::NotFound(note.id))?;

        let created_at = self.notes[index].created_at;
        let updated = Note::with_parts(note.id, &note.title, &note.content, created_at)?;
        self.notes[index] = updated.clone();
        self.commit("update");
        Ok(updated)
    }

    /// Removes a note by id and persists the collection.
    ///
    /// Idempotent: an absent id returns `false` and changes nothing.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }
        self.commit("remove");
        true
    }

    /// Returns one note by id, or `None` when it does not exist.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns notes matching `query`, newest first.
    ///
    /// Matching is a case-insensitive substring test over title and content;
    /// a blank query matches everything. Ordering is `created_at` descending,
    /// recomputed per call. Equal timestamps keep insertion recency because
    /// the underlying collection is newest-first and the sort is stable.
    pub fn list(&self, query: &str) -> Vec<Note> {
        let mut matched: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.matches(query))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    /// Current collection in insertion order, for render snapshots.
    pub fn snapshot(&self) -> &[Note] {
        &self.notes
    }

    /// Monotonic mutation counter for re-render triggers.
    ///
    /// A presentation layer redraws when the revision it last rendered from
    /// differs from the current one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Writes the current collection to storage, surfacing any error.
    ///
    /// Mutations already persist on success; this exists for callers that
    /// need to observe a persistence fault directly.
    pub fn persist(&self) -> StoreResult<()> {
        let blob = encode_notes(&self.notes)?;
        self.storage.write_blob(&blob)?;
        Ok(())
    }

    // Bumps the revision and saves. A failed save is logged as a warning and
    // does not fail the foreground mutation; the in-memory state stands.
    fn commit(&mut self, operation: &str) {
        self.revision += 1;
        match self.persist() {
            Ok(()) => info!(
                "event=store_save module=store status=ok op={} count={} revision={}",
                operation,
                self.notes.len(),
                self.revision
            ),
            Err(err) => warn!(
                "event=store_save module=store status=error op={} error={}",
                operation, err
            ),
        }
    }
}

fn load_notes(storage: &dyn NoteStorage) -> Vec<Note> {
    let blob = match storage.read_blob() {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("event=store_load module=store status=ok source=empty");
            return Vec::new();
        }
        Err(err) => {
            error!("event=store_load module=store status=error stage=read error={err}");
            return Vec::new();
        }
    };

    match decode_notes(&blob) {
        Ok(notes) => {
            info!(
                "event=store_load module=store status=ok count={}",
                notes.len()
            );
            notes
        }
        Err(err) => {
            error!("event=store_load module=store status=error stage=decode error={err}");
            Vec::new()
        }
    }
}
