use chrono::{TimeZone, Utc};
use jotter_core::storage::encode_notes;
use jotter_core::{MemoryStorage, Note, NoteId, NoteStorage, NoteStore};
use uuid::Uuid;

fn note_at(title: &str, content: &str, epoch_secs: i64) -> Note {
    Note::with_parts(
        Uuid::new_v4(),
        title,
        content,
        Utc.timestamp_opt(epoch_secs, 0).unwrap(),
    )
    .unwrap()
}

fn store_with(notes: Vec<Note>) -> NoteStore {
    let storage = MemoryStorage::new();
    storage.write_blob(&encode_notes(&notes).unwrap()).unwrap();
    NoteStore::open(Box::new(storage))
}

fn listed_ids(store: &NoteStore, query: &str) -> Vec<NoteId> {
    store.list(query).iter().map(|note| note.id).collect()
}

#[test]
fn empty_query_returns_all_sorted_newest_first() {
    let old = note_at("old", "body", 1_000);
    let mid = note_at("mid", "body", 2_000);
    let new = note_at("new", "body", 3_000);
    // Storage order is deliberately scrambled; list must reorder.
    let store = store_with(vec![mid.clone(), old.clone(), new.clone()]);

    assert_eq!(listed_ids(&store, ""), vec![new.id, mid.id, old.id]);
}

#[test]
fn blank_query_with_whitespace_matches_everything() {
    let store = store_with(vec![note_at("a", "body", 1), note_at("b", "body", 2)]);
    assert_eq!(store.list("   ").len(), 2);
}

#[test]
fn search_matches_title_and_content_case_insensitively() {
    let groceries = note_at("Groceries", "Milk, eggs", 1_000);
    let todo = note_at("Todo", "Call plumber", 2_000);
    let store = store_with(vec![todo.clone(), groceries.clone()]);

    assert_eq!(listed_ids(&store, "milk"), vec![groceries.id]);
    assert_eq!(listed_ids(&store, "MILK"), vec![groceries.id]);
    assert_eq!(listed_ids(&store, "todo"), vec![todo.id]);
    assert!(store.list("xyz-no-match").is_empty());
}

#[test]
fn equal_timestamps_keep_newest_insertion_first() {
    let earlier = note_at("earlier", "body", 5_000);
    let later = note_at("later", "body", 5_000);
    // Newest-first storage order: `later` was created after `earlier`.
    let store = store_with(vec![later.clone(), earlier.clone()]);

    assert_eq!(listed_ids(&store, ""), vec![later.id, earlier.id]);
}

#[test]
fn list_is_idempotent_between_mutations() {
    let store = store_with(vec![
        note_at("one", "body", 1_000),
        note_at("two", "body", 2_000),
    ]);
    assert_eq!(store.list(""), store.list(""));
    assert_eq!(store.list("one"), store.list("one"));
}

#[test]
fn create_search_remove_scenario() {
    let mut store = NoteStore::open(Box::new(MemoryStorage::new()));
    let a = store.create("Groceries", "Milk, eggs").unwrap();
    let b = store.create("Todo", "Call plumber").unwrap();

    assert_eq!(listed_ids(&store, ""), vec![b.id, a.id]);
    assert_eq!(listed_ids(&store, "milk"), vec![a.id]);

    assert!(store.remove(a.id));
    assert!(store.find(a.id).is_none());
    assert_eq!(listed_ids(&store, ""), vec![b.id]);
}
