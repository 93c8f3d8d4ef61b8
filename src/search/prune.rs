//! Cheap candidate pre-filter applied before edit distance scoring.
//!
//! A candidate survives when it shares at least one character with the
//! query, compared after lowercasing both sides. This is a heuristic: a
//! single-character query keeps almost every candidate, and a misspelled
//! query made entirely of foreign characters discards everything.

use std::collections::HashSet;

/// Returns the candidates sharing at least one character with `query`, in
/// their original order.
///
/// An empty query shares nothing, so every candidate is discarded; the
/// ranker never prunes with an empty query.
///
/// # Example
///
/// ```rust
/// use weather_tui::search::prune;
///
/// let cities = ["Moscow", "Cape Town", "Paris"];
/// assert_eq!(prune(&cities, "xyz"), Vec::<&str>::new());
/// assert_eq!(prune(&cities, "W"), vec!["Moscow", "Cape Town"]);
/// ```
#[must_use]
pub fn prune<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    let wanted: HashSet<char> = query.chars().flat_map(char::to_lowercase).collect();

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| {
            candidate
                .chars()
                .flat_map(char::to_lowercase)
                .any(|c| wanted.contains(&c))
        })
        .collect()
}
