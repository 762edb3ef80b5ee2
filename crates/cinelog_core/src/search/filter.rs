//! Search criteria and record matching.
//!
//! # Responsibility
//! - Describe the optional criteria a caller may supply.
//! - Decide whether a record satisfies every supplied criterion.
//!
//! # Invariants
//! - Unsupplied criteria never exclude a record.
//! - Text matching is case-insensitive substring containment.

use crate::model::movie::Movie;

/// Optional search criteria, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive substring of the genre.
    pub genre: Option<String>,
    /// Case-insensitive substring of the director name.
    pub director: Option<String>,
    /// Inclusive (min, max) release-year window.
    pub year_range: Option<(i32, i32)>,
    /// Lowest accepted rating.
    pub min_rating: Option<u8>,
}

impl SearchCriteria {
    /// Returns whether `movie` satisfies every supplied criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(needle) = &self.title {
            if !contains_ignore_case(&movie.title, needle) {
                return false;
            }
        }
        if let Some(needle) = &self.genre {
            if !contains_ignore_case(&movie.genre, needle) {
                return false;
            }
        }
        if let Some(needle) = &self.director {
            if !contains_ignore_case(&movie.director, needle) {
                return false;
            }
        }
        if let Some((min, max)) = self.year_range {
            if movie.year < min || movie.year > max {
                return false;
            }
        }
        if let Some(floor) = self.min_rating {
            if movie.rating < floor {
                return false;
            }
        }
        true
    }

    /// Returns whether no criterion is supplied.
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.director.is_none()
            && self.year_range.is_none()
            && self.min_rating.is_none()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
