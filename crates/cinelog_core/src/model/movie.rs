//! Movie domain model and field validation.
//!
//! # Responsibility
//! - Define the canonical movie record and its write-path request models.
//! - Provide table-driven field validation shared by add and edit.
//!
//! # Invariants
//! - `rating` is always within `[MIN_RATING, MAX_RATING]`.
//! - `year` is always within `[FIRST_FILM_YEAR, max_release_year()]`.
//! - `title` and `genre` are never blank.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 10;
/// Year of the earliest known film; lower bound for `Movie::year`.
pub const FIRST_FILM_YEAR: i32 = 1888;

/// Highest release year currently accepted.
///
/// One year past the present, so announced releases can be catalogued.
pub fn max_release_year() -> i32 {
    Utc::now().year() + 1
}

/// Field-level validation error.
///
/// Carries enough context for a shell to report the offending field and
/// the accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieValidationError {
    EmptyTitle,
    EmptyGenre,
    YearOutOfRange { year: i32, min: i32, max: i32 },
    RatingOutOfRange { rating: u8, min: u8, max: u8 },
}

impl MovieValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyGenre => "genre",
            Self::YearOutOfRange { .. } => "year",
            Self::RatingOutOfRange { .. } => "rating",
        }
    }
}

impl Display for MovieValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyGenre => write!(f, "genre must not be empty"),
            Self::YearOutOfRange { year, min, max } => {
                write!(f, "year {year} is outside the accepted range {min}-{max}")
            }
            Self::RatingOutOfRange { rating, min, max } => {
                write!(f, "rating {rating} is outside the accepted range {min}-{max}")
            }
        }
    }
}

impl Error for MovieValidationError {}

/// Canonical movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    /// Release year, 4-digit plausible value.
    pub year: i32,
    /// Personal rating on the 1-10 scale.
    pub rating: u8,
    /// May be empty.
    pub director: String,
    /// Free text, may be empty.
    pub review: String,
    /// Creation stamp in epoch milliseconds.
    pub added_at: i64,
}

impl Movie {
    /// Builds a validated record from draft input, stamping `added_at`.
    pub fn from_draft(draft: MovieDraft) -> Result<Self, MovieValidationError> {
        let movie = Self {
            title: draft.title,
            genre: draft.genre,
            year: draft.year,
            rating: draft.rating,
            director: draft.director,
            review: draft.review,
            added_at: Utc::now().timestamp_millis(),
        };
        movie.validate()?;
        Ok(movie)
    }

    /// Runs every field check in declaration order; the first failure wins.
    pub fn validate(&self) -> Result<(), MovieValidationError> {
        for check in FIELD_CHECKS {
            check(self)?;
        }
        Ok(())
    }
}

/// Request model for adding a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: u8,
    pub director: String,
    pub review: String,
}

impl MovieDraft {
    /// Draft with the required fields set and the optional text fields empty.
    pub fn new(title: impl Into<String>, genre: impl Into<String>, year: i32, rating: u8) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
            director: String::new(),
            review: String::new(),
        }
    }
}

/// Field-to-new-value map for edit operations.
///
/// `None` keeps the current value. Validation of the patched record is the
/// store's job, so a bad patch never half-applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<u8>,
    pub director: Option<String>,
    pub review: Option<String>,
}

impl MoviePatch {
    /// Applies every supplied field to `movie`.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(review) = &self.review {
            movie.review = review.clone();
        }
    }

    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.director.is_none()
            && self.review.is_none()
    }
}

/// One check per constrained field, evaluated identically by add and edit.
const FIELD_CHECKS: [fn(&Movie) -> Result<(), MovieValidationError>; 4] =
    [check_title, check_genre, check_year, check_rating];

fn check_title(movie: &Movie) -> Result<(), MovieValidationError> {
    if movie.title.trim().is_empty() {
        return Err(MovieValidationError::EmptyTitle);
    }
    Ok(())
}

fn check_genre(movie: &Movie) -> Result<(), MovieValidationError> {
    if movie.genre.trim().is_empty() {
        return Err(MovieValidationError::EmptyGenre);
    }
    Ok(())
}

fn check_year(movie: &Movie) -> Result<(), MovieValidationError> {
    let max = max_release_year();
    if movie.year < FIRST_FILM_YEAR || movie.year > max {
        return Err(MovieValidationError::YearOutOfRange {
            year: movie.year,
            min: FIRST_FILM_YEAR,
            max,
        });
    }
    Ok(())
}

fn check_rating(movie: &Movie) -> Result<(), MovieValidationError> {
    if movie.rating < MIN_RATING || movie.rating > MAX_RATING {
        return Err(MovieValidationError::RatingOutOfRange {
            rating: movie.rating,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok(())
}
