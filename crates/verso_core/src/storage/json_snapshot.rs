//! JSON-file and in-memory snapshot slots.
//!
//! # Responsibility
//! - Persist the collection as one JSON array in a single named file slot.
//! - Provide an in-memory slot for tests and ephemeral collections.
//!
//! # Invariants
//! - Saves are full overwrites of the slot.
//! - Decode failures are logged and reported as an absent snapshot.

use super::{SnapshotResult, SnapshotStore};
use crate::model::poem::Poem;
use log::{info, warn};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed snapshot slot holding one serialized poem array.
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    /// Creates a slot at the given file path. Nothing is read or written
    /// until `load`/`save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshot {
    fn load(&self) -> Option<Vec<Poem>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=snapshot_load module=storage status=absent path={}",
                    self.path.display()
                );
                return None;
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=storage status=error error_code=snapshot_read_failed path={} error={}",
                    self.path.display(),
                    err
                );
                return None;
            }
        };

        match serde_json::from_slice::<Vec<Poem>>(&bytes) {
            Ok(poems) => {
                info!(
                    "event=snapshot_load module=storage status=ok path={} count={}",
                    self.path.display(),
                    poems.len()
                );
                Some(poems)
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=storage status=error error_code=snapshot_decode_failed path={} error={}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    fn save(&self, poems: &[Poem]) -> SnapshotResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_vec_pretty(poems)?;
        fs::write(&self.path, encoded)?;
        info!(
            "event=snapshot_save module=storage status=ok path={} count={}",
            self.path.display(),
            poems.len()
        );
        Ok(())
    }
}

/// In-memory snapshot slot.
///
/// The environment is single-threaded by design, so interior mutability via
/// `RefCell` is sufficient.
#[derive(Default)]
pub struct MemorySnapshot {
    slot: RefCell<Option<Vec<Poem>>>,
}

impl MemorySnapshot {
    /// Creates an empty slot; `load` reports it as absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with a collection.
    pub fn with_poems(poems: Vec<Poem>) -> Self {
        Self {
            slot: RefCell::new(Some(poems)),
        }
    }

    /// Returns the last saved collection, if any.
    pub fn saved(&self) -> Option<Vec<Poem>> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Option<Vec<Poem>> {
        self.slot.borrow().clone()
    }

    fn save(&self, poems: &[Poem]) -> SnapshotResult<()> {
        *self.slot.borrow_mut() = Some(poems.to_vec());
        Ok(())
    }
}
