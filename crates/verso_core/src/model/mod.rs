//! Domain model for the poetry collection.
//!
//! # Responsibility
//! - Define the canonical `Poem` record shared by store, view and storage.
//! - Own input validation and category normalization rules.
//!
//! # Invariants
//! - Every poem is identified by a stable `PoemId`.
//! - Stored `title`/`content` are trimmed, non-empty and length-bounded.

pub mod poem;
