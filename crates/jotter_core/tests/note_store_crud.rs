use chrono::Duration;
use jotter_core::{MemoryStorage, Note, NoteStore, NoteValidationError, StoreError};
use uuid::Uuid;

fn open_memory_store() -> NoteStore {
    NoteStore::open(Box::new(MemoryStorage::new()))
}

#[test]
fn create_assigns_identity_and_prepends() {
    let mut store = open_memory_store();
    let first = store.create("Groceries", "Milk, eggs").unwrap();
    let second = store.create("Todo", "Call plumber").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.len(), 2);
    assert_eq!(store.snapshot()[0].id, second.id);
    assert_eq!(store.snapshot()[1].id, first.id);
}

#[test]
fn create_trims_title_and_content() {
    let mut store = open_memory_store();
    let note = store.create("  Padded  ", "  body  ").unwrap();
    assert_eq!(note.title, "Padded");
    assert_eq!(note.content, "body");
}

#[test]
fn create_rejects_blank_fields_without_mutating() {
    let mut store = open_memory_store();

    let err = store.create("", "content").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyTitle);
    let err = store.create("title", "   ").unwrap_err();
    assert_eq!(err, NoteValidationError::EmptyContent);

    assert!(store.is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn update_replaces_in_place_and_preserves_created_at() {
    let mut store = open_memory_store();
    let kept = store.create("kept", "first body").unwrap();
    let target = store.create("target", "second body").unwrap();

    let mut edited = target.clone();
    edited.title = "target v2".to_string();
    edited.content = "rewritten".to_string();
    // Caller supplies a different timestamp; the store must ignore it.
    edited.created_at = edited.created_at + Duration::hours(1);

    let updated = store.update(edited).unwrap();
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.created_at, target.created_at);

    // Same position in the underlying collection.
    assert_eq!(store.snapshot()[0].id, target.id);

    let found = store.find(target.id).unwrap();
    assert_eq!(found.title, "target v2");
    assert_eq!(found.content, "rewritten");
    assert_eq!(store.find(kept.id).unwrap().content, "first body");
}

#[test]
fn update_unknown_id_is_a_not_found_noop() {
    let mut store = open_memory_store();
    store.create("kept", "kept body").unwrap();
    let stray = Note::new("stray", "stray body").unwrap();

    let err = store.update(stray.clone()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == stray.id));
    assert_eq!(store.len(), 1);
    assert!(store.find(stray.id).is_none());
}

#[test]
fn update_rejects_blank_fields_without_mutating() {
    let mut store = open_memory_store();
    let note = store.create("valid", "valid body").unwrap();

    let mut edited = note.clone();
    edited.content = "  ".to_string();
    let err = store.update(edited).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(NoteValidationError::EmptyContent)
    ));
    assert_eq!(store.find(note.id).unwrap().content, "valid body");
}

#[test]
fn remove_is_idempotent() {
    let mut store = open_memory_store();
    let note = store.create("gone soon", "body").unwrap();

    assert!(store.remove(note.id));
    assert!(store.find(note.id).is_none());
    assert!(!store.remove(note.id));
    assert!(store.is_empty());
}

#[test]
fn remove_unknown_id_leaves_collection_unchanged() {
    let mut store = open_memory_store();
    store.create("survivor", "body").unwrap();
    let revision = store.revision();

    assert!(!store.remove(Uuid::new_v4()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.revision(), revision);
}

#[test]
fn revision_increments_once_per_successful_mutation() {
    let mut store = open_memory_store();
    assert_eq!(store.revision(), 0);

    let note = store.create("one", "body").unwrap();
    assert_eq!(store.revision(), 1);

    let mut edited = note.clone();
    edited.title = "two".to_string();
    store.update(edited).unwrap();
    assert_eq!(store.revision(), 2);

    store.remove(note.id);
    assert_eq!(store.revision(), 3);
}
