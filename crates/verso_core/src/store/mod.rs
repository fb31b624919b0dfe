//! Collection store and built-in seed data.
//!
//! # Responsibility
//! - Own the authoritative, newest-first ordered poem list.
//! - Orchestrate validation, mutation and the persist hook.
//!
//! # Invariants
//! - Mutations validate before touching state; a rejected draft leaves the
//!   collection untouched.
//! - Every successful mutation triggers a full snapshot rewrite.

pub mod collection;
pub mod seed;
