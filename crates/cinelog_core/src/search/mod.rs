//! Criteria-based search over the collection.

pub mod filter;

pub use filter::SearchCriteria;
