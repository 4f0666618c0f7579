//! In-memory storage slot.
//!
//! # Responsibility
//! - Provide an ephemeral slot for tests and throwaway sessions.

use crate::storage::{NoteStorage, StorageResult};
use std::cell::RefCell;

/// Ephemeral slot holding the blob in process memory.
///
/// Single-threaded by design, matching the store's concurrency model.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStorage for MemoryStorage {
    fn read_blob(&self) -> StorageResult<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write_blob(&self, blob: &str) -> StorageResult<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
