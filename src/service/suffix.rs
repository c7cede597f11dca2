//! Numeric suffix expansion.

use crate::domain::{Candidate, NumberRange};

/// Expand every candidate with numeric suffixes.
///
/// Each candidate is followed by one variant per number in `range`, appended
/// without a separator, so the output holds `range.count() + 1` entries per
/// input. Without a range the candidates pass through unchanged.
#[must_use]
pub fn expand(candidates: Vec<Candidate>, range: Option<NumberRange>) -> Vec<Candidate> {
    let Some(range) = range else {
        return candidates;
    };

    candidates
        .into_iter()
        .flat_map(|candidate| {
            let variants = range.iter().map({
                let base = candidate.clone();
                move |n| Candidate {
                    handle: format!("{}{n}", base.handle),
                    ..base.clone()
                }
            });
            std::iter::once(candidate).chain(variants)
        })
        .collect()
}
