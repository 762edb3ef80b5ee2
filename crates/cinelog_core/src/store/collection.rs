//! Movie collection store.
//!
//! # Responsibility
//! - Own the authoritative in-memory record list for the process lifetime.
//! - Provide validated CRUD, search, sort and aggregate operations.
//! - Persist the collection after every mutating operation.
//!
//! # Invariants
//! - Write paths validate the full record before committing it.
//! - Edits are atomic: either every supplied field applies or none does.
//! - Read paths (`list`, `get`, `search`, `sorted`, `stats`) never touch disk.
//! - A persist failure keeps the in-memory mutation; memory may run ahead
//!   of disk until the storage problem is resolved.

use crate::model::movie::{Movie, MovieDraft, MoviePatch, MovieValidationError};
use crate::search::filter::SearchCriteria;
use crate::stats::{collection_stats, CollectionStats};
use crate::storage::{load_movies, save_movies, StorageError};
use log::{info, warn};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for collection operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(MovieValidationError),
    NotFound { index: usize, len: usize },
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { index, len } => {
                write!(f, "no movie at index {index} (collection holds {len})")
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<MovieValidationError> for StoreError {
    fn from(value: MovieValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Sort key for [`MovieStore::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    Rating,
    Genre,
}

/// Sort direction for [`MovieStore::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Authoritative in-memory movie collection bound to one durable file.
#[derive(Debug)]
pub struct MovieStore {
    path: PathBuf,
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Opens the store, loading existing records from `path`.
    ///
    /// A missing file yields an empty collection. A corrupt file fails with
    /// [`StoreError::Storage`] and leaves nothing loaded; the caller decides
    /// whether to continue via [`MovieStore::empty`] or abort.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let movies = load_movies(&path)?;
        info!(
            "event=store_open module=store status=ok path={} count={}",
            path.display(),
            movies.len()
        );
        Ok(Self { path, movies })
    }

    /// Creates an empty store bound to `path` without reading the file.
    ///
    /// Fallback entry point after [`MovieStore::open`] reports corrupt data.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            movies: Vec::new(),
        }
    }

    /// Path of the durable collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Ordered view of every record currently held in memory.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// One record by positional index.
    pub fn get(&self, index: usize) -> StoreResult<&Movie> {
        self.movies.get(index).ok_or(StoreError::NotFound {
            index,
            len: self.movies.len(),
        })
    }

    /// Validates and appends a new record, then persists.
    ///
    /// Returns the new record's index. Validation failure leaves the
    /// collection unchanged.
    pub fn add(&mut self, draft: MovieDraft) -> StoreResult<usize> {
        let movie = Movie::from_draft(draft)?;
        self.movies.push(movie);
        let index = self.movies.len() - 1;
        self.persist()?;
        info!("event=store_add module=store status=ok index={index}");
        Ok(index)
    }

    /// Applies `patch` to the record at `index`, then persists.
    ///
    /// Every supplied field is validated against the patched record before
    /// any change is committed, so a failing field leaves the stored record
    /// untouched.
    pub fn edit(&mut self, index: usize, patch: &MoviePatch) -> StoreResult<()> {
        if index >= self.movies.len() {
            return Err(StoreError::NotFound {
                index,
                len: self.movies.len(),
            });
        }

        let mut updated = self.movies[index].clone();
        patch.apply_to(&mut updated);
        updated.validate()?;

        self.movies[index] = updated;
        self.persist()?;
        info!("event=store_edit module=store status=ok index={index}");
        Ok(())
    }

    /// Removes and returns the record at `index`, then persists.
    ///
    /// Later records shift down by one, preserving their relative order.
    pub fn delete(&mut self, index: usize) -> StoreResult<Movie> {
        if index >= self.movies.len() {
            return Err(StoreError::NotFound {
                index,
                len: self.movies.len(),
            });
        }

        let removed = self.movies.remove(index);
        self.persist()?;
        info!("event=store_delete module=store status=ok index={index}");
        Ok(removed)
    }

    /// Records matching every supplied criterion, in stored order.
    ///
    /// No criteria matches everything; a criterion nothing satisfies yields
    /// an empty result, not an error.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| criteria.matches(movie))
            .collect()
    }

    /// New ordering of the collection without mutating stored order.
    ///
    /// Equal keys keep their stored relative order; string keys compare
    /// case-insensitively.
    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<&Movie> {
        let mut view: Vec<&Movie> = self.movies.iter().collect();
        view.sort_by(|a, b| {
            let ordering = compare_by_key(key, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        view
    }

    /// Aggregates over the current in-memory collection. Pure read.
    pub fn stats(&self) -> CollectionStats {
        collection_stats(&self.movies)
    }

    fn persist(&self) -> StoreResult<()> {
        if let Err(err) = save_movies(&self.path, &self.movies) {
            warn!(
                "event=store_persist module=store status=error path={} error={err}",
                self.path.display()
            );
            return Err(StoreError::Storage(err));
        }
        Ok(())
    }
}

fn compare_by_key(key: SortKey, a: &Movie, b: &Movie) -> Ordering {
    match key {
        SortKey::Title => case_insensitive(&a.title, &b.title),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Rating => a.rating.cmp(&b.rating),
        SortKey::Genre => case_insensitive(&a.genre, &b.genre),
    }
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
