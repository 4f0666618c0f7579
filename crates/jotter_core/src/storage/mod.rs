//! Persistence medium for the note blob.
//!
//! # Responsibility
//! - Define the single key-value slot contract used by the store.
//! - Provide file-backed and in-memory slot implementations.
//! - Encode/decode the versioned JSON blob.
//!
//! # Invariants
//! - Writes replace the whole blob; there is no incremental update.
//! - Reading a never-written slot is not an error.

mod blob;
mod file;
mod memory;

pub use blob::{decode_notes, encode_notes, SCHEMA_VERSION};
pub use file::{FileStorage, STORAGE_FILE_NAME};
pub use memory::MemoryStorage;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for slot access and blob decoding.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// Blob schema version is newer than this binary supports.
    UnsupportedVersion {
        blob_version: u32,
        latest_supported: u32,
    },
    /// Blob decoded structurally but violates note invariants.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io failure: {err}"),
            Self::Serde(err) => write!(f, "malformed note blob: {err}"),
            Self::UnsupportedVersion {
                blob_version,
                latest_supported,
            } => write!(
                f,
                "blob schema version {blob_version} is newer than supported {latest_supported}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// The single key-value slot holding the serialized note collection.
///
/// Implementations own the medium; the store owns the data. The store reads
/// the slot once at open and rewrites it wholesale after every mutation.
pub trait NoteStorage {
    /// Reads the current blob. `None` means the slot has never been written.
    fn read_blob(&self) -> StorageResult<Option<String>>;
    /// Replaces the slot content wholesale.
    fn write_blob(&self, blob: &str) -> StorageResult<()>;
}
