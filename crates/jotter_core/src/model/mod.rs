//! Domain model for the note store.
//!
//! # Responsibility
//! - Define the canonical note entity and its field contracts.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Field validation runs before a note may enter the store.

pub mod note;
