//! Shared name normalization for fuzzy, case/whitespace-insensitive comparison.

/// Canonical form used for all substring comparisons: lower-cased, trimmed,
/// internal whitespace runs collapsed to single spaces.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join(" ")
}

/// `normalize` plus naive singularization: a single trailing `s` (not `ss`)
/// is stripped, so "apples" keys the same as "apple".
///
/// This is a known-lossy heuristic carried over for parity with stored
/// data: "tomatoes" becomes "tomatoe", not "tomato", and irregular plurals
/// are not handled. Callers that need exact-ish key comparison (shopping
/// list dedup) accept these misses.
pub fn normalize_key(s: &str) -> String {
    let normalized = normalize(s);
    if normalized.ends_with('s') && !normalized.ends_with("ss") {
        normalized[..normalized.len() - 1].to_string()
    } else {
        normalized
    }
}
