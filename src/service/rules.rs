//! Permutation rules.
//!
//! Applies the active template catalog to a normalized name and cleans the
//! rendered handles.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Candidate, NameParts, Profile};
use crate::error::{AppError, Result};
use crate::service::pattern::ParsedPattern;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w.\-]+").expect("valid regex"));
static REPEATED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}|_{2,}|-{2,}").expect("valid regex"));

/// Ordered set of parsed templates for one run.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    patterns: Vec<ParsedPattern>,
}

impl TemplateCatalog {
    /// Build the catalog for `profile`, followed by any extra templates.
    ///
    /// Extra templates that repeat one already in the catalog are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if an extra template does not parse.
    pub fn new(profile: Profile, extra: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(profile.templates().len() + extra.len());

        for template in profile.templates().iter().copied().chain(extra.iter().map(String::as_str)) {
            let pattern = ParsedPattern::parse(template).map_err(AppError::InvalidConfig)?;
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }

        tracing::debug!(%profile, templates = patterns.len(), "Template catalog built");
        Ok(Self { patterns })
    }

    /// Render every template for `name`, in catalog order.
    ///
    /// Templates that need a missing name part, or that clean down to an
    /// empty string, produce nothing. Coinciding handles are kept; removing
    /// them is the deduplicator's job.
    #[must_use]
    pub fn apply(&self, display: &str, name: &NameParts) -> Vec<Candidate> {
        self.patterns
            .iter()
            .filter_map(|pattern| {
                let handle = clean_handle(&pattern.render(name)?);
                (!handle.is_empty())
                    .then(|| Candidate::username(display, handle, pattern.source()))
            })
            .collect()
    }
}

/// Clean a rendered handle.
///
/// Keeps word characters, `.`, `_` and `-`; collapses runs of the same
/// separator; trims separators from both ends.
#[must_use]
pub fn clean_handle(raw: &str) -> String {
    let kept = DISALLOWED.replace_all(raw.trim(), "");
    let collapsed = REPEATED_SEPARATOR.replace_all(&kept, |caps: &regex::Captures<'_>| {
        caps[0][..1].to_string()
    });
    collapsed.trim_matches(['.', '_', '-']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(tokens: &[&str]) -> NameParts {
        NameParts::from_tokens(tokens.iter().map(|t| (*t).to_string())).unwrap()
    }

    fn handles(profile: Profile, tokens: &[&str]) -> Vec<String> {
        TemplateCatalog::new(profile, &[])
            .unwrap()
            .apply("test", &parts(tokens))
            .into_iter()
            .map(|c| c.handle)
            .collect()
    }

    #[test]
    fn test_builtin_catalogs_parse() {
        for profile in Profile::ALL {
            let catalog = TemplateCatalog::new(profile, &[]).unwrap();
            assert_eq!(catalog.patterns.len(), profile.templates().len());
        }
    }

    #[test]
    fn test_minimal_john_doe() {
        assert_eq!(
            handles(Profile::Minimal, &["john", "doe"]),
            ["john.doe", "jdoe", "johndoe", "john"]
        );
    }

    #[test]
    fn test_common_john_doe() {
        let out = handles(Profile::Common, &["john", "doe"]);
        for expected in ["john.doe", "jdoe", "j.doe", "john_doe", "doe.john", "johnd", "doej"] {
            assert!(out.iter().any(|h| h == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_wide_john_doe() {
        let out = handles(Profile::Wide, &["john", "doe"]);
        assert_eq!(out.len(), Profile::Wide.templates().len());
        assert_eq!(out[0], "johnd");
        assert!(out.iter().any(|h| h == "doe-john"));
        assert!(out.iter().any(|h| h == "johndoed"));
    }

    #[test]
    fn test_middle_names_ignored_by_builtins() {
        assert_eq!(
            handles(Profile::Minimal, &["john", "ronald", "reuel", "doe"]),
            handles(Profile::Minimal, &["john", "doe"])
        );
    }

    #[test]
    fn test_single_token_name() {
        assert_eq!(handles(Profile::Wide, &["cher"]), ["cher"]);
    }

    #[test]
    fn test_short_names_may_coincide() {
        // With a one-letter first name, "{last}{f}" and "{last}{first}" render the same.
        let out = handles(Profile::Wide, &["j", "doe"]);
        assert!(out.iter().filter(|h| *h == "doej").count() >= 2);
    }

    #[test]
    fn test_extra_templates() {
        let extra = vec!["{first}.{m}.{last}".to_string(), "{f}{last}".to_string()];
        let catalog = TemplateCatalog::new(Profile::Minimal, &extra).unwrap();
        assert_eq!(catalog.patterns.len(), Profile::Minimal.templates().len() + 1);

        let out: Vec<_> = catalog
            .apply("John Q Doe", &parts(&["john", "q", "doe"]))
            .into_iter()
            .map(|c| c.handle)
            .collect();
        assert_eq!(out.last().map(String::as_str), Some("john.q.doe"));
    }

    #[test]
    fn test_invalid_extra_template() {
        let err = TemplateCatalog::new(Profile::Common, &["{nick}".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_clean_handle() {
        assert_eq!(clean_handle("o'brien.smith"), "obrien.smith");
        assert_eq!(clean_handle("a..b__c--d"), "a.b_c-d");
        assert_eq!(clean_handle("._john-"), "john");
        assert_eq!(clean_handle("élodie"), "élodie");
        assert_eq!(clean_handle("'.'"), "");
    }

    #[test]
    fn test_candidate_provenance() {
        let catalog = TemplateCatalog::new(Profile::Minimal, &[]).unwrap();
        let first = catalog.apply("John Doe", &parts(&["john", "doe"])).remove(0);
        assert_eq!(first.name, "John Doe");
        assert_eq!(first.template, "{first}.{last}");
    }
}
