//! Aggregate statistics over the in-memory collection.
//!
//! # Responsibility
//! - Compute counts, averages and distributions for display.
//!
//! # Invariants
//! - Pure read: no persistence, no mutation.
//! - An empty collection yields zero count, `0.0` average and empty
//!   distributions, never a division by zero.

use crate::model::movie::Movie;
use std::collections::BTreeMap;

/// Aggregates computed by [`crate::MovieStore::stats`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStats {
    pub count: usize,
    /// Mean rating, `0.0` for an empty collection.
    pub average_rating: f64,
    /// Genre -> record count, keyed by stored genre text.
    pub genre_distribution: BTreeMap<String, usize>,
    /// Rating value -> record count.
    pub rating_distribution: BTreeMap<u8, usize>,
    /// Genre with the most records; lexicographically first on ties.
    pub most_common_genre: Option<String>,
    /// (oldest, newest) release years present.
    pub year_span: Option<(i32, i32)>,
    /// Title of the highest-rated record; first in stored order on ties.
    pub highest_rated: Option<String>,
    /// Title of the lowest-rated record; first in stored order on ties.
    pub lowest_rated: Option<String>,
}

/// Computes aggregates over `movies`.
pub fn collection_stats(movies: &[Movie]) -> CollectionStats {
    if movies.is_empty() {
        return CollectionStats::default();
    }

    let count = movies.len();
    let rating_sum: u32 = movies.iter().map(|movie| u32::from(movie.rating)).sum();
    let average_rating = f64::from(rating_sum) / count as f64;

    let mut genre_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut rating_distribution: BTreeMap<u8, usize> = BTreeMap::new();
    for movie in movies {
        *genre_distribution.entry(movie.genre.clone()).or_default() += 1;
        *rating_distribution.entry(movie.rating).or_default() += 1;
    }

    // BTreeMap iterates genres in ascending order, so requiring a strictly
    // greater count picks the lexicographically first genre on ties.
    let mut top_genre: Option<(&String, usize)> = None;
    for (genre, &n) in &genre_distribution {
        if top_genre.map_or(true, |(_, best)| n > best) {
            top_genre = Some((genre, n));
        }
    }
    let most_common_genre = top_genre.map(|(genre, _)| genre.clone());

    let oldest = movies.iter().map(|movie| movie.year).min();
    let newest = movies.iter().map(|movie| movie.year).max();

    let mut best: Option<&Movie> = None;
    let mut worst: Option<&Movie> = None;
    for movie in movies {
        if best.map_or(true, |current| movie.rating > current.rating) {
            best = Some(movie);
        }
        if worst.map_or(true, |current| movie.rating < current.rating) {
            worst = Some(movie);
        }
    }

    CollectionStats {
        count,
        average_rating,
        genre_distribution,
        rating_distribution,
        most_common_genre,
        year_span: oldest.zip(newest),
        highest_rated: best.map(|movie| movie.title.clone()),
        lowest_rated: worst.map(|movie| movie.title.clone()),
    }
}
