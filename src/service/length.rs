//! Length filter.

use std::num::NonZeroUsize;

use crate::domain::Candidate;

/// Truncate every handle to at most `max` characters, keeping the left part.
///
/// Handles already short enough are left as they are. A separator left at
/// the cut is trimmed, so `john.doe` at 5 becomes `john`. Truncation can make
/// handles collide; duplicates are left for the deduplicator.
#[must_use]
pub fn truncate(mut candidates: Vec<Candidate>, max: Option<NonZeroUsize>) -> Vec<Candidate> {
    let Some(max) = max else {
        return candidates;
    };

    for candidate in &mut candidates {
        if let Some((idx, _)) = candidate.handle.char_indices().nth(max.get()) {
            candidate.handle.truncate(idx);
            let kept = candidate.handle.trim_end_matches(['.', '_', '-']).len();
            candidate.handle.truncate(kept);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(handles: &[&str], max: usize) -> Vec<String> {
        let candidates = handles
            .iter()
            .map(|h| Candidate::username("n", *h, "{first}"))
            .collect();
        truncate(candidates, NonZeroUsize::new(max))
            .into_iter()
            .map(|c| c.handle)
            .collect()
    }

    #[test]
    fn test_truncates_from_right() {
        assert_eq!(run(&["john.doe", "jdoe"], 4), ["john", "jdoe"]);
    }

    #[test]
    fn test_trailing_separator_trimmed() {
        assert_eq!(run(&["john.doe", "j_doe", "john--x"], 5), ["john", "j_doe", "john"]);
        assert_eq!(run(&["jean-luc"], 5), ["jean"]);
    }

    #[test]
    fn test_max_one_collapses() {
        assert_eq!(run(&["john.doe", "jdoe", "doe.john"], 1), ["j", "j", "d"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(run(&["élodie"], 2), ["él"]);
    }

    #[test]
    fn test_disabled() {
        assert_eq!(run(&["john.doe"], 0), ["john.doe"]);
    }
}
