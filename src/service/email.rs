//! Domain combiner.

use crate::domain::Candidate;

/// Combine every username with every domain.
///
/// Usernames form the outer loop and domains the inner one, so each
/// username's emails appear together in domain order. `domains` is expected
/// to be cleaned and deduplicated already (see [`crate::domain::clean_domains`]).
#[must_use]
pub fn combine(usernames: &[Candidate], domains: &[String]) -> Vec<Candidate> {
    usernames
        .iter()
        .flat_map(|user| domains.iter().map(move |domain| user.with_domain(domain)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateKind;

    #[test]
    fn test_combine_order() {
        let users = vec![
            Candidate::username("Ann Lee", "ann.lee", "{first}.{last}"),
            Candidate::username("Ann Lee", "alee", "{f}{last}"),
        ];
        let domains = vec!["a.com".to_string(), "b.com".to_string()];
        let emails: Vec<_> = combine(&users, &domains)
            .into_iter()
            .map(|c| c.handle)
            .collect();
        assert_eq!(
            emails,
            ["ann.lee@a.com", "ann.lee@b.com", "alee@a.com", "alee@b.com"]
        );
    }

    #[test]
    fn test_combine_kind() {
        let users = vec![Candidate::username("Ann Lee", "ann", "{first}")];
        let out = combine(&users, &["x.org".to_string()]);
        assert_eq!(out[0].kind, CandidateKind::Email);
        assert_eq!(out[0].domain.as_deref(), Some("x.org"));
    }

    #[test]
    fn test_no_domains() {
        let users = vec![Candidate::username("Ann Lee", "ann", "{first}")];
        assert!(combine(&users, &[]).is_empty());
    }
}
