use cinelog_core::storage::{backup_path, load_movies, save_movies, StorageError};
use cinelog_core::{Movie, MovieDraft, MovieStore, StoreError};
use std::fs;

fn movie(title: &str, genre: &str, year: i32, rating: u8) -> Movie {
    Movie::from_draft(MovieDraft::new(title, genre, year, rating)).unwrap()
}

fn record_json(movie: &Movie) -> serde_json::Value {
    serde_json::to_value(movie).unwrap()
}

#[test]
fn save_then_load_reconstructs_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");

    let movies = vec![
        movie("Inception", "Sci-Fi", 2010, 9),
        movie("Memento", "Thriller", 2000, 8),
        movie("Alien", "Horror", 1979, 10),
    ];
    save_movies(&path, &movies).unwrap();

    let loaded = load_movies(&path).unwrap();
    assert_eq!(loaded, movies);
}

#[test]
fn load_on_missing_file_is_empty_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    assert!(load_movies(&path).unwrap().is_empty());
}

#[test]
fn save_of_empty_collection_writes_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");

    save_movies(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    assert!(load_movies(&path).unwrap().is_empty());
}

#[test]
fn unparseable_file_is_rejected_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");
    fs::write(&path, "{ this is not a json array").unwrap();

    let err = load_movies(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[test]
fn invalid_utf8_is_treated_as_corrupt_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");
    fs::write(&path, [0xFF, 0xFE, 0x00, 0x9F]).unwrap();

    // Binary garbage must steer callers to the corrupt-data recovery path,
    // not the I/O one.
    let err = load_movies(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[test]
fn store_open_surfaces_corrupt_data_and_empty_fallback_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");
    fs::write(&path, "not even close").unwrap();

    let err = MovieStore::open(&path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage(StorageError::Corrupt { .. })
    ));

    // Caller-side fallback policy: keep running with an empty collection.
    let mut store = MovieStore::empty(&path);
    assert!(store.is_empty());
    store.add(MovieDraft::new("Heat", "Crime", 1995, 8)).unwrap();

    let reopened = MovieStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
}

#[test]
fn individually_invalid_records_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");

    let good = movie("Memento", "Thriller", 2000, 8);
    let mut out_of_range = record_json(&good);
    out_of_range["rating"] = serde_json::json!(11);
    let entries = serde_json::json!([
        record_json(&good),
        { "title": "partial record" },
        out_of_range,
    ]);
    fs::write(&path, serde_json::to_string_pretty(&entries).unwrap()).unwrap();

    let loaded = load_movies(&path).unwrap();
    assert_eq!(loaded, vec![good]);
}

#[test]
fn backup_holds_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");
    let backup = backup_path(&path);

    let first = vec![movie("Inception", "Sci-Fi", 2010, 9)];
    save_movies(&path, &first).unwrap();
    assert!(!backup.exists());

    let second = vec![
        first[0].clone(),
        movie("Memento", "Thriller", 2000, 8),
    ];
    save_movies(&path, &second).unwrap();

    assert_eq!(load_movies(&path).unwrap(), second);
    assert_eq!(load_movies(&backup).unwrap(), first);
}

#[test]
fn store_mutations_refresh_the_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movie_collection.json");

    let mut store = MovieStore::open(&path).unwrap();
    store.add(MovieDraft::new("Inception", "Sci-Fi", 2010, 9)).unwrap();
    store.add(MovieDraft::new("Memento", "Thriller", 2000, 8)).unwrap();
    store.delete(0).unwrap();

    // The backup trails the primary by exactly one mutation.
    let backup = load_movies(&backup_path(&path)).unwrap();
    assert_eq!(backup.len(), 2);
    let current = load_movies(&path).unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].title, "Memento");
}
