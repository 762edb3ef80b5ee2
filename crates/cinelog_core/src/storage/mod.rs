//! Durable storage for the movie collection.
//!
//! # Responsibility
//! - Read and write the collection file in a human-readable format.
//! - Keep a backup snapshot of the previous good state on every save.
//!
//! # Invariants
//! - The backup copy completes before the primary file is replaced.
//! - A missing collection file is an empty collection, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::{backup_path, load_movies, save_movies, DEFAULT_COLLECTION_FILE};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for collection file access.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Corrupt { message: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Corrupt { message } => write!(f, "corrupt collection file: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt { .. } => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
