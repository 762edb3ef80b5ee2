//! Domain model for the movie collection.
//!
//! # Responsibility
//! - Define the canonical record shape held by the collection store.
//! - Own field validation shared by every write path.
//!
//! # Invariants
//! - A record that exists in the store has passed every field check.
//! - Identity is positional; the model carries no natural key.

pub mod movie;
