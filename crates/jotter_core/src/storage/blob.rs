//! Versioned JSON codec for the persisted note collection.
//!
//! # Responsibility
//! - Encode the full collection into the versioned envelope.
//! - Decode current and legacy blob layouts.
//!
//! # Invariants
//! - Encode always writes `SCHEMA_VERSION`.
//! - Blobs newer than `SCHEMA_VERSION` are rejected, not misread.
//! - Decoded notes are re-validated before they reach the store.

use crate::model::note::Note;
use crate::storage::{StorageError, StorageResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current blob schema version.
///
/// Version 0 is the legacy layout: a bare JSON array with no envelope, whose
/// ids are opaque base36 strings rather than UUIDs.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Envelope {
    version: u32,
    notes: Vec<Note>,
}

/// Reference-era record shape: `id` is an arbitrary string token.
#[derive(Debug, Deserialize)]
struct LegacyRecord {
    id: String,
    title: String,
    content: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

/// Encodes the full collection into the current envelope layout.
pub fn encode_notes(notes: &[Note]) -> StorageResult<String> {
    #[derive(Serialize)]
    struct EnvelopeRef<'a> {
        version: u32,
        notes: &'a [Note],
    }

    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        notes,
    })?)
}

/// Decodes a persisted blob into notes.
///
/// Accepts the current envelope and the legacy bare-array layout written
/// before the version tag existed.
pub fn decode_notes(blob: &str) -> StorageResult<Vec<Note>> {
    match serde_json::from_str::<Envelope>(blob) {
        Ok(envelope) => {
            if envelope.version > SCHEMA_VERSION {
                return Err(StorageError::UnsupportedVersion {
                    blob_version: envelope.version,
                    latest_supported: SCHEMA_VERSION,
                });
            }
            for note in &envelope.notes {
                note.validate()
                    .map_err(|err| StorageError::InvalidData(format!("note {}: {err}", note.id)))?;
            }
            Ok(envelope.notes)
        }
        Err(_) => decode_legacy(blob),
    }
}

// Legacy ids were minted as `Date.now().toString(36)` plus a random suffix;
// parseable UUIDs are kept, anything else gets a fresh identity. The value
// was opaque to the presentation layer, so remapping is safe.
fn decode_legacy(blob: &str) -> StorageResult<Vec<Note>> {
    let records = serde_json::from_str::<Vec<LegacyRecord>>(blob)?;
    records
        .into_iter()
        .map(|record| {
            let id = Uuid::parse_str(&record.id).unwrap_or_else(|_| Uuid::new_v4());
            Note::with_parts(id, &record.title, &record.content, record.created_at)
                .map_err(|err| StorageError::InvalidData(format!("note {}: {err}", record.id)))
        })
        .collect()
}
