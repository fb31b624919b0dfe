//! Core domain logic for Verso, a single-user poetry collection.
//! This crate is the single source of truth for collection invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::poem::{
    normalize_categories, Poem, PoemDraft, PoemId, PoemValidationError, CONTENT_MAX_CHARS,
    TITLE_MAX_CHARS,
};
pub use storage::{
    JsonFileSnapshot, MemorySnapshot, SnapshotError, SnapshotResult, SnapshotStore,
};
pub use store::collection::{CollectionStore, StoreError};
pub use view::{filter_by_category, filter_poems, list_categories, search, PoemFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
