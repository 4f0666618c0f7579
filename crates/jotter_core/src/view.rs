//! Presentation-facing view states decoded from navigation paths.
//!
//! # Responsibility
//! - Map the navigation contract (`/notes`, `/notes/{id}`) onto a closed set
//!   of view states, decoded once per navigation.
//!
//! # Invariants
//! - Unknown paths and unparseable ids never panic; they are `NotFound`.
//! - `Detail` always carries an id that parsed; resolution against the store
//!   is a separate, explicit step.

use crate::model::note::NoteId;
use crate::store::note_store::NoteStore;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static DETAIL_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/notes/([^/]+)$").expect("valid detail path regex"));

/// Closed set of screens a presentation layer can be asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The note list (path `/notes`).
    List,
    /// Detail view for one note (path `/notes/{id}`).
    Detail(NoteId),
    /// Anything that does not name a renderable screen.
    NotFound,
}

impl ViewState {
    /// Decodes a navigation path without consulting the store.
    pub fn from_path(path: &str) -> Self {
        if path == "/notes" {
            return Self::List;
        }

        let Some(captures) = DETAIL_PATH_RE.captures(path) else {
            return Self::NotFound;
        };
        match Uuid::parse_str(&captures[1]) {
            Ok(id) => Self::Detail(id),
            Err(_) => Self::NotFound,
        }
    }

    /// Decodes a path and downgrades dangling detail ids to `NotFound`.
    pub fn resolve(path: &str, store: &NoteStore) -> Self {
        match Self::from_path(path) {
            Self::Detail(id) if store.find(id).is_none() => Self::NotFound,
            state => state,
        }
    }
}
