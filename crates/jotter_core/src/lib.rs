//! Core domain logic for Jotter.
//! This crate is the single source of truth for note behavior.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use storage::{
    FileStorage, MemoryStorage, NoteStorage, StorageError, StorageResult, STORAGE_FILE_NAME,
};
pub use store::note_store::{NoteStore, StoreError, StoreResult};
pub use view::ViewState;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
