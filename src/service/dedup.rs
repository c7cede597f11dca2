//! Order-preserving deduplication.

use std::collections::HashSet;

use crate::domain::Candidate;

/// Remove candidates whose handle was already seen, keeping the first one.
#[must_use]
pub fn dedup(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.handle.clone()))
        .collect()
}
