//! Generated candidates.

use serde::Serialize;

/// Kind of generated handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Bare username.
    Username,
    /// `username@domain`.
    Email,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Username => write!(f, "username"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// A generated handle with its provenance.
///
/// Two candidates are the same entity when their handles are equal; the other
/// fields are for traceability only.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Display form of the source name.
    pub name: String,

    /// Username or email.
    pub kind: CandidateKind,

    /// The generated string.
    pub handle: String,

    /// Template that produced the username part.
    pub template: String,

    /// Email domain, for emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Candidate {
    /// Create a username candidate.
    pub fn username(
        name: impl Into<String>,
        handle: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: CandidateKind::Username,
            handle: handle.into(),
            template: template.into(),
            domain: None,
        }
    }

    /// Combine a username candidate with a domain.
    #[must_use]
    pub fn with_domain(&self, domain: &str) -> Self {
        Self {
            name: self.name.clone(),
            kind: CandidateKind::Email,
            handle: format!("{}@{domain}", self.handle),
            template: self.template.clone(),
            domain: Some(domain.to_string()),
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Candidate {}

impl std::hash::Hash for Candidate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}
