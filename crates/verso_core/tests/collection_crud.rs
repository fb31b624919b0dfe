use verso_core::storage::{SnapshotResult, SnapshotStore};
use verso_core::{
    CollectionStore, MemorySnapshot, Poem, PoemDraft, PoemValidationError, StoreError,
};

fn empty_store() -> CollectionStore<MemorySnapshot> {
    CollectionStore::open(MemorySnapshot::with_poems(Vec::new()))
}

#[test]
fn open_falls_back_to_seed_collection_when_snapshot_is_absent() {
    let store = CollectionStore::open(MemorySnapshot::new());
    assert_eq!(store.len(), 2);
    assert!(store.poems().iter().all(|poem| !poem.title.is_empty()));
    // Seeding alone must not write the slot back.
    assert!(store.snapshot().saved().is_none());
}

#[test]
fn create_grows_collection_by_one_with_fresh_id() {
    let mut store = empty_store();
    let first = store
        .create(PoemDraft::new("Title A", "Body A"))
        .expect("valid draft");
    let second = store
        .create(PoemDraft::new("Title B", "Body B"))
        .expect("valid draft");

    assert_eq!(store.len(), 2);
    assert_ne!(first.id, second.id);
}

#[test]
fn create_orders_collection_newest_first() {
    let mut store = empty_store();
    store
        .create(PoemDraft::new("Title A", "Body A"))
        .expect("valid draft");
    store
        .create(PoemDraft::new("Title B", "Body B"))
        .expect("valid draft");

    let titles: Vec<&str> = store
        .poems()
        .iter()
        .map(|poem| poem.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Title B", "Title A"]);
}

#[test]
fn create_trims_and_normalizes_input() {
    let mut store = empty_store();
    let created = store
        .create(
            PoemDraft::new("  Tide  ", "  Salt wind.  ")
                .with_categories(["  sea ", "sea", " ", "night"]),
        )
        .expect("valid draft");

    assert_eq!(created.title, "Tide");
    assert_eq!(created.content, "Salt wind.");
    assert_eq!(
        created.categories,
        Some(vec!["sea".to_string(), "night".to_string()])
    );
}

#[test]
fn create_rejects_blank_title_without_mutating_state() {
    let mut store = empty_store();
    let error = store
        .create(PoemDraft::new("", "Hello"))
        .expect_err("blank title must be rejected");

    assert_eq!(
        error,
        StoreError::Validation(PoemValidationError::EmptyTitle)
    );
    assert!(store.is_empty());
    // The pre-filled slot still holds the untouched empty collection.
    assert!(store
        .snapshot()
        .saved()
        .expect("slot was pre-filled")
        .is_empty());
}

#[test]
fn create_rejects_blank_content() {
    let mut store = empty_store();
    let error = store
        .create(PoemDraft::new("Hello", "   "))
        .expect_err("blank content must be rejected");
    assert_eq!(
        error,
        StoreError::Validation(PoemValidationError::EmptyContent)
    );
    assert!(store.is_empty());
}

#[test]
fn update_replaces_fields_but_preserves_id_date_and_position() {
    let mut store = empty_store();
    store
        .create(PoemDraft::new("Oldest", "Body"))
        .expect("valid draft");
    let target = store
        .create(PoemDraft::new("Middle", "Body"))
        .expect("valid draft");
    store
        .create(PoemDraft::new("Newest", "Body"))
        .expect("valid draft");

    let updated = store
        .update(
            target.id,
            PoemDraft::new("Middle, revised", "New body").with_categories(["drafts"]),
        )
        .expect("existing id");

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.date, target.date);
    assert_eq!(updated.title, "Middle, revised");
    assert_eq!(updated.categories, Some(vec!["drafts".to_string()]));

    let titles: Vec<&str> = store
        .poems()
        .iter()
        .map(|poem| poem.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle, revised", "Oldest"]);
}

#[test]
fn update_on_missing_id_fails_and_leaves_collection_unchanged() {
    let mut store = empty_store();
    let created = store
        .create(PoemDraft::new("Tide", "Salt wind."))
        .expect("valid draft");

    let missing = uuid::Uuid::now_v7();
    let error = store
        .update(missing, PoemDraft::new("Other", "Other body"))
        .expect_err("missing id must fail");

    assert_eq!(error, StoreError::NotFound(missing));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(created.id).map(|poem| poem.title.as_str()), Some("Tide"));
}

#[test]
fn update_missing_id_takes_precedence_over_validation() {
    let mut store = empty_store();
    let missing = uuid::Uuid::now_v7();
    let error = store
        .update(missing, PoemDraft::new("", ""))
        .expect_err("missing id must fail");
    assert_eq!(error, StoreError::NotFound(missing));
}

#[test]
fn update_with_invalid_draft_leaves_record_untouched() {
    let mut store = empty_store();
    let created = store
        .create(PoemDraft::new("Tide", "Salt wind."))
        .expect("valid draft");

    let error = store
        .update(created.id, PoemDraft::new("  ", "New body"))
        .expect_err("blank title must be rejected");
    assert_eq!(
        error,
        StoreError::Validation(PoemValidationError::EmptyTitle)
    );

    let stored = store.get(created.id).expect("record still present");
    assert_eq!(stored.title, "Tide");
    assert_eq!(stored.content, "Salt wind.");
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let mut store = empty_store();
    let keep = store
        .create(PoemDraft::new("Keep", "Body"))
        .expect("valid draft");
    let remove = store
        .create(PoemDraft::new("Remove", "Body"))
        .expect("valid draft");

    assert!(store.delete(remove.id));
    assert_eq!(store.len(), 1);
    assert!(store.get(keep.id).is_some());
    assert!(store.get(remove.id).is_none());
}

#[test]
fn delete_on_missing_id_is_a_noop() {
    let mut store = empty_store();
    store
        .create(PoemDraft::new("Tide", "Salt wind."))
        .expect("valid draft");

    assert!(!store.delete(uuid::Uuid::now_v7()));
    assert_eq!(store.len(), 1);
}

#[test]
fn mutations_rewrite_the_snapshot_slot() {
    let mut store = empty_store();
    let created = store
        .create(PoemDraft::new("Tide", "Salt wind."))
        .expect("valid draft");

    let saved = store.snapshot().saved().expect("create persists");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, created.id);

    store.delete(created.id);
    let saved = store.snapshot().saved().expect("delete persists");
    assert!(saved.is_empty());
}

struct FailingSnapshot;

impl SnapshotStore for FailingSnapshot {
    fn load(&self) -> Option<Vec<Poem>> {
        Some(Vec::new())
    }

    fn save(&self, _poems: &[Poem]) -> SnapshotResult<()> {
        Err(std::io::Error::other("disk on fire").into())
    }
}

#[test]
fn persist_failure_is_not_surfaced_to_the_caller() {
    let mut store = CollectionStore::open(FailingSnapshot);
    let created = store
        .create(PoemDraft::new("Tide", "Salt wind."))
        .expect("save failure must stay internal");
    assert_eq!(store.len(), 1);
    assert!(store.delete(created.id));
}
