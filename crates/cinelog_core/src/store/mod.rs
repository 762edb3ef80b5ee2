//! Collection store: the authoritative in-memory record list.
//!
//! # Responsibility
//! - Expose validated CRUD, search, sort and aggregate operations.
//! - Keep durable storage synchronized after every mutation.

pub mod collection;

pub use collection::{MovieStore, SortDirection, SortKey, StoreError, StoreResult};
