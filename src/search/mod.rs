//! Typo-tolerant city search.
//!
//! Ranking happens in three stages:
//!
//! ```text
//! candidates ──▶ prune (shares a character?) ──▶ score (edit distance) ──▶ keep minimum tie-set
//! ```
//!
//! # Modules
//!
//! - [`distance`]: Levenshtein distance over a reusable table
//! - [`prune`]: Character-overlap pre-filter
//! - [`rank`]: Tie-set selection in input order

pub mod distance;
pub mod prune;
pub mod rank;

pub use distance::{distance, EditDistance};
pub use prune::prune;
pub use rank::{rank, score, Candidate};
