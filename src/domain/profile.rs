//! Permutation profiles and their template catalogs.
//!
//! Each profile maps to an ordered list of template strings. The catalogs
//! are plain data so the active rule set can be audited and tested without
//! running the generator. Built-in templates only reference the first and
//! last name; middle names are ignored.
//!
//! Template syntax:
//! - `{first}` / `{last}` - first / last name
//! - `{middle}` - middle names joined
//! - `{f}` / `{l}` / `{m}` - initials of first / last / first middle name
//! - anything else is literal text

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Smallest useful set.
const MINIMAL: &[&str] = &["{first}.{last}", "{f}{last}", "{first}{last}", "{first}"];

/// Patterns seen in most organisations.
const COMMON: &[&str] = &[
    "{first}.{last}",
    "{f}{last}",
    "{first}{last}",
    "{f}.{last}",
    "{first}_{last}",
    "{last}.{first}",
    "{first}{l}",
    "{last}{f}",
    "{first}",
];

/// Full catalog, including rarer patterns.
const WIDE: &[&str] = &[
    "{first}{l}",       // johnd
    "{f}{last}",        // jdoe
    "{first}{last}",    // johndoe
    "{first}.{last}",   // john.doe
    "{last}.{first}",   // doe.john
    "{first}_{last}",   // john_doe
    "{f}.{last}",       // j.doe
    "{first}.{l}",      // john.d
    "{f}_{last}",       // j_doe
    "{first}-{last}",   // john-doe
    "{last}-{first}",   // doe-john
    "{last}_{first}",   // doe_john
    "{last}{f}",        // doej
    "{f}{last}{l}",     // jdoed
    "{first}{last}{l}", // johndoed
    "{last}{first}",    // doejohn
    "{f}{l}",           // jd
    "{f}.{l}",          // j.d
    "{last}",           // doe
    "{first}",          // john
];

/// Named preset selecting the active templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Practical middle set.
    #[default]
    Common,
    /// Full catalog.
    Wide,
    /// Smallest subset.
    Minimal,
}

impl Profile {
    /// All profiles.
    pub const ALL: [Self; 3] = [Self::Common, Self::Wide, Self::Minimal];

    /// Template strings active for this profile, in generation order.
    #[must_use]
    pub const fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Common => COMMON,
            Self::Wide => WIDE,
            Self::Minimal => MINIMAL,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Wide => write!(f, "wide"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}
