//! File-backed storage slot.
//!
//! # Responsibility
//! - Hold the blob in one JSON file under a caller-chosen directory.
//! - Keep the canonical slot name stable across sessions.
//!
//! # Invariants
//! - The slot file name never changes; callers pick only the directory.
//! - A missing file reads as an absent slot, not an error.

use crate::storage::{NoteStorage, StorageResult};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Canonical slot file name.
///
/// Continues the `notes_app_data_v1` key used by earlier versions of the
/// app, so existing data directories keep working.
pub const STORAGE_FILE_NAME: &str = "notes_app_data_v1.json";

/// One-file JSON slot under a data directory.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a slot under `data_dir`, creating the directory if needed.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with status.
    pub fn create(data_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let data_dir = data_dir.as_ref();
        if let Err(err) = fs::create_dir_all(data_dir) {
            error!(
                "event=storage_open module=storage status=error dir={} error={}",
                data_dir.display(),
                err
            );
            return Err(err.into());
        }

        let path = data_dir.join(STORAGE_FILE_NAME);
        info!(
            "event=storage_open module=storage status=ok path={}",
            path.display()
        );
        Ok(Self { path })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStorage for FileStorage {
    fn read_blob(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_blob(&self, blob: &str) -> StorageResult<()> {
        fs::write(&self.path, blob)?;
        Ok(())
    }
}
