//! Store layer owning the canonical note collection.
//!
//! # Responsibility
//! - Provide the presentation-facing CRUD/search contract.
//! - Own the load-on-open, save-on-mutation persistence policy.
//!
//! # Invariants
//! - No other component retains a mutable copy of the collection.
//! - The persistence layer is the store's delegate, not an owner.

pub mod note_store;
