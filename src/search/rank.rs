//! Best-match selection combining pruning and edit distance.

use super::distance::EditDistance;
use super::prune::prune;

/// A pruned candidate paired with its distance to the folded query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The candidate exactly as it appears in the input.
    pub name: &'a str,
    /// Edit distance between the lowercased name and the lowercased query.
    pub distance: usize,
}

/// Scores every candidate that survives pruning, in input order.
///
/// Returns an empty vector for an empty query or when pruning discards
/// everything.
#[must_use]
pub fn score<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<Candidate<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let folded_query = query.to_lowercase();
    let mut scorer = EditDistance::default();

    prune(candidates, &folded_query)
        .into_iter()
        .map(|name| Candidate {
            name,
            distance: scorer.distance(&name.to_lowercase(), &folded_query),
        })
        .collect()
}

/// Returns the candidates that best match `query`.
///
/// An empty query returns every candidate unchanged. Otherwise candidates
/// sharing no character with the query are discarded, the rest are scored
/// by edit distance against the query (both lowercased), and every candidate
/// tying for the minimum distance is returned in input order.
///
/// # Example
///
/// ```rust
/// use weather_tui::search::rank;
///
/// let cities = ["Paris", "Cape Town", "Moscow"];
/// assert_eq!(rank(&cities, "paris"), vec!["Paris"]);
/// assert_eq!(rank(&cities, ""), vec!["Paris", "Cape Town", "Moscow"]);
/// assert!(rank(&["Moscow", "Cape Town"], "xyz").is_empty());
/// ```
#[must_use]
pub fn rank<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    let _span = tracing::debug_span!(
        "rank",
        candidate_count = candidates.len(),
        query_len = query.len()
    )
    .entered();

    if query.is_empty() {
        return candidates.iter().map(AsRef::as_ref).collect();
    }

    let scored = score(candidates, query);
    let Some(best) = scored.iter().map(|c| c.distance).min() else {
        tracing::debug!("no candidate shares a character with the query");
        return Vec::new();
    };

    let matches: Vec<&str> = scored
        .into_iter()
        .filter(|c| c.distance == best)
        .map(|c| c.name)
        .collect();

    tracing::debug!(best_distance = best, match_count = matches.len(), "ranked candidates");
    matches
}
