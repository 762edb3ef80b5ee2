//! JSON collection file read/write.
//!
//! # Responsibility
//! - Load records from disk, skipping individually invalid entries.
//! - Write the whole collection via backup copy, temp file and rename.
//!
//! # Invariants
//! - A file that is not UTF-8 text holding a JSON array is rejected whole
//!   as corrupt.
//! - An entry that fails decode or field validation is skipped with a
//!   warning; the valid remainder still loads.
//! - The primary file is replaced by rename, never truncated in place.

use super::{StorageError, StorageResult};
use crate::model::movie::Movie;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Default collection file name, relative to the working directory.
pub const DEFAULT_COLLECTION_FILE: &str = "movie_collection.json";

const BACKUP_SUFFIX: &str = "bak";
const TEMP_SUFFIX: &str = "tmp";

/// Returns the sibling backup path for `path`, e.g. `movie_collection.json.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    sibling_with_suffix(path, BACKUP_SUFFIX)
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Loads all movies stored at `path`.
///
/// A missing file yields an empty collection. An unparseable file fails
/// with [`StorageError::Corrupt`]; individually invalid entries are
/// skipped and logged instead of failing the load.
pub fn load_movies(path: &Path) -> StorageResult<Vec<Movie>> {
    if !path.exists() {
        info!(
            "event=storage_load module=storage status=ok path={} count=0 reason=missing_file",
            path.display()
        );
        return Ok(Vec::new());
    }

    let bytes = fs::read(path)?;
    let raw = String::from_utf8(bytes).map_err(|err| StorageError::Corrupt {
        message: format!("{} is not valid UTF-8: {err}", path.display()),
    })?;
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
            message: format!("{} is not a JSON array of records: {err}", path.display()),
        })?;

    let total = entries.len();
    let mut movies = Vec::with_capacity(total);
    for (position, entry) in entries.into_iter().enumerate() {
        match decode_record(entry) {
            Ok(movie) => movies.push(movie),
            Err(reason) => {
                warn!(
                    "event=storage_load module=storage status=skip path={} position={} reason={}",
                    path.display(),
                    position,
                    reason
                );
            }
        }
    }

    info!(
        "event=storage_load module=storage status=ok path={} count={} skipped={}",
        path.display(),
        movies.len(),
        total - movies.len()
    );
    Ok(movies)
}

fn decode_record(entry: serde_json::Value) -> Result<Movie, String> {
    let movie: Movie =
        serde_json::from_value(entry).map_err(|err| format!("undecodable record: {err}"))?;
    movie
        .validate()
        .map_err(|err| format!("invalid record: {err}"))?;
    Ok(movie)
}

/// Writes the whole collection to `path`.
///
/// The previous contents survive at [`backup_path`]; the new contents land
/// in a temp file first and take the primary's place by rename, so an
/// interrupted write leaves either the old file or the new one.
pub fn save_movies(path: &Path, movies: &[Movie]) -> StorageResult<()> {
    if path.exists() {
        fs::copy(path, backup_path(path))?;
    }

    let serialized =
        serde_json::to_string_pretty(movies).map_err(|err| StorageError::Corrupt {
            message: format!("collection failed to serialize: {err}"),
        })?;

    let temp = sibling_with_suffix(path, TEMP_SUFFIX);
    fs::write(&temp, serialized)?;
    fs::rename(&temp, path)?;

    info!(
        "event=storage_save module=storage status=ok path={} count={}",
        path.display(),
        movies.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::backup_path;
    use std::path::Path;

    #[test]
    fn backup_path_appends_bak_to_file_name() {
        let path = Path::new("/data/movie_collection.json");
        assert_eq!(
            backup_path(path),
            Path::new("/data/movie_collection.json.bak")
        );
    }
}
