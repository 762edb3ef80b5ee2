//! Core data-management layer for CineLog.
//! This crate is the single source of truth for collection invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod stats;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::movie::{
    max_release_year, Movie, MovieDraft, MoviePatch, MovieValidationError, FIRST_FILM_YEAR,
    MAX_RATING, MIN_RATING,
};
pub use search::filter::SearchCriteria;
pub use stats::{collection_stats, CollectionStats};
pub use storage::{backup_path, StorageError, DEFAULT_COLLECTION_FILE};
pub use store::collection::{MovieStore, SortDirection, SortKey, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
