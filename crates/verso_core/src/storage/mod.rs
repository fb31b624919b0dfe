//! Snapshot persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the snapshot store contract used by the collection store.
//! - Isolate file-format and I/O details from collection orchestration.
//!
//! # Invariants
//! - `load` never surfaces an error: absent and unreadable snapshots both
//!   yield `None`, with the reason logged.
//! - `save` rewrites the whole slot; there is no incremental format.

use crate::model::poem::Poem;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_snapshot;

pub use json_snapshot::{JsonFileSnapshot, MemorySnapshot};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot persistence failure.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot i/o failure: {err}"),
            Self::Serde(err) => write!(f, "snapshot encoding failure: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Persistence contract for the collection snapshot.
///
/// The collection store invokes `save` as an explicit hook after every
/// mutation; implementations own the slot format and location.
pub trait SnapshotStore {
    /// Reads the persisted collection.
    ///
    /// Returns `None` when no snapshot exists or the existing one cannot be
    /// read or decoded. Callers treat both identically.
    fn load(&self) -> Option<Vec<Poem>>;

    /// Rewrites the slot with the full collection contents.
    fn save(&self, poems: &[Poem]) -> SnapshotResult<()>;
}
