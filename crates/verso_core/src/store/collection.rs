//! Authoritative collection store.
//!
//! # Responsibility
//! - Keep the ordered poem list and its persisted mirror in sync.
//! - Expose the only write surface for the collection.
//!
//! # Invariants
//! - Order is newest-first; create prepends, update keeps position.
//! - `id` and `date` never change after creation.
//! - Persistence is best-effort: a failed save is logged, never surfaced.

use crate::model::poem::{
    normalize_categories, validate_content, validate_title, Poem, PoemDraft, PoemId,
    PoemValidationError,
};
use crate::storage::SnapshotStore;
use crate::store::seed::seed_poems;
use chrono::Local;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Caller-visible failure for collection mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Draft rejected by validation; state is unchanged.
    Validation(PoemValidationError),
    /// Update target does not exist; state is unchanged.
    NotFound(PoemId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "poem not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<PoemValidationError> for StoreError {
    fn from(value: PoemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Authoritative poem collection with a persisted mirror.
///
/// The store is the sole write surface; the UI layer receives it by
/// reference and reads the list through [`poems`](Self::poems) or the pure
/// view functions in [`crate::view`].
pub struct CollectionStore<S: SnapshotStore> {
    poems: Vec<Poem>,
    snapshot: S,
}

impl<S: SnapshotStore> CollectionStore<S> {
    /// Opens the collection from its snapshot slot.
    ///
    /// An absent or unreadable snapshot falls back to the built-in seed
    /// collection; no error reaches the caller. The seed list is not
    /// written back until the first real mutation.
    pub fn open(snapshot: S) -> Self {
        let poems = match snapshot.load() {
            Some(poems) => {
                info!(
                    "event=collection_open module=store status=ok source=snapshot count={}",
                    poems.len()
                );
                poems
            }
            None => {
                let seeds = seed_poems();
                info!(
                    "event=collection_open module=store status=ok source=seed count={}",
                    seeds.len()
                );
                seeds
            }
        };

        Self { poems, snapshot }
    }

    /// Returns the full collection, newest first.
    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    /// Returns one poem by id.
    pub fn get(&self, id: PoemId) -> Option<&Poem> {
        self.poems.iter().find(|poem| poem.id == id)
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    /// Returns the snapshot slot backing this store.
    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// Creates a poem from a draft and prepends it to the collection.
    ///
    /// Assigns a fresh id and today's date, normalizes categories, persists,
    /// and returns the stored record. A rejected draft leaves the collection
    /// and its snapshot untouched.
    pub fn create(&mut self, draft: PoemDraft) -> Result<Poem, StoreError> {
        let title = validate_title(&draft.title)?;
        let content = validate_content(&draft.content)?;
        let categories = normalize_categories(&draft.categories);

        let poem = Poem {
            id: Uuid::now_v7(),
            title,
            content,
            date: Local::now().date_naive(),
            categories,
        };

        self.poems.insert(0, poem.clone());
        info!(
            "event=poem_create module=store status=ok id={} count={}",
            poem.id,
            self.poems.len()
        );
        self.persist();
        Ok(poem)
    }

    /// Replaces a poem's title, content and categories in place.
    ///
    /// The record keeps its id, creation date and position in the ordered
    /// collection. Fails with [`StoreError::NotFound`] when the id is
    /// absent, leaving state unchanged.
    pub fn update(&mut self, id: PoemId, draft: PoemDraft) -> Result<Poem, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }

        let title = validate_title(&draft.title)?;
        let content = validate_content(&draft.content)?;
        let categories = normalize_categories(&draft.categories);

        // Presence was checked above; the record cannot have gone away.
        let poem = self
            .poems
            .iter_mut()
            .find(|poem| poem.id == id)
            .ok_or(StoreError::NotFound(id))?;
        poem.title = title;
        poem.content = content;
        poem.categories = categories;
        let updated = poem.clone();

        info!("event=poem_update module=store status=ok id={id}");
        self.persist();
        Ok(updated)
    }

    /// Removes the poem with the given id.
    ///
    /// Returns whether a record was removed; an absent id is a no-op, not
    /// an error.
    pub fn delete(&mut self, id: PoemId) -> bool {
        let before = self.poems.len();
        self.poems.retain(|poem| poem.id != id);
        let removed = self.poems.len() != before;

        if removed {
            info!(
                "event=poem_delete module=store status=ok id={} count={}",
                id,
                self.poems.len()
            );
            self.persist();
        }

        removed
    }

    /// Explicit persist hook, invoked after every successful mutation.
    ///
    /// Best-effort by contract: the single-user collection prefers staying
    /// responsive over surfacing a failed mirror write.
    fn persist(&self) {
        if let Err(err) = self.snapshot.save(&self.poems) {
            warn!(
                "event=snapshot_save module=store status=error count={} error={}",
                self.poems.len(),
                err
            );
        }
    }
}
