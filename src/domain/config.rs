//! Generator configuration types.
//!
//! These types hold the validated, read-only configuration for one run.

use std::num::NonZeroUsize;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{NumberRange, Profile};
use crate::error::{AppError, Result};

/// What to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Usernames only.
    #[default]
    Usernames,
    /// Emails only.
    Emails,
    /// Usernames followed by emails.
    Both,
}

impl Mode {
    /// Whether usernames are part of the output.
    #[must_use]
    pub const fn includes_usernames(self) -> bool {
        matches!(self, Self::Usernames | Self::Both)
    }

    /// Whether emails are part of the output.
    #[must_use]
    pub const fn includes_emails(self) -> bool {
        matches!(self, Self::Emails | Self::Both)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usernames => write!(f, "usernames"),
            Self::Emails => write!(f, "emails"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One handle per line.
    #[default]
    Txt,
    /// `name,handle` rows with a header.
    Csv,
    /// Array of candidate records.
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Casing applied to generated usernames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Lower-case everything.
    #[default]
    Lower,
    /// Keep the input's casing.
    Original,
    /// Upper-case everything.
    Upper,
}

impl CaseMode {
    /// Apply this casing to a token.
    #[must_use]
    pub fn apply(self, token: &str) -> String {
        match self {
            Self::Lower => token.to_lowercase(),
            Self::Original => token.to_string(),
            Self::Upper => token.to_uppercase(),
        }
    }
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Original => write!(f, "original"),
            Self::Upper => write!(f, "upper"),
        }
    }
}

/// Validated configuration for the handle generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Active template profile.
    pub profile: Profile,

    /// What to generate.
    pub mode: Mode,

    /// Transliterate to ASCII and strip apostrophes/hyphens.
    pub ascii: bool,

    /// Output casing.
    pub case: CaseMode,

    /// Truncate usernames to this many characters.
    pub max_length: Option<NonZeroUsize>,

    /// Numeric suffixes appended to every username.
    pub numbers: Option<NumberRange>,

    /// Email domains, cleaned and deduplicated, in given order.
    pub domains: Vec<String>,

    /// Extra templates appended to the profile catalog.
    pub patterns: Vec<String>,

    /// Keep at most this many usernames per name.
    pub max_per_name: Option<NonZeroUsize>,
}

impl GeneratorConfig {
    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `MissingDomain` if the mode needs emails but no domain is set,
    /// or `InvalidConfig` if a domain is blank.
    pub fn validate(&self) -> Result<()> {
        if self.mode.includes_emails() && self.domains.is_empty() {
            return Err(AppError::MissingDomain(self.mode.to_string()));
        }
        if let Some(domain) = self.domains.iter().find(|d| d.is_empty()) {
            return Err(AppError::InvalidConfig(format!("empty domain '{domain}'")));
        }
        Ok(())
    }
}

/// Clean user-supplied domains: trim, drop a leading `@`, keep first occurrence.
///
/// # Errors
///
/// Returns `InvalidConfig` if a domain is blank or contains whitespace or `@`.
pub fn clean_domains<I, S>(domains: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for raw in domains {
        let raw = raw.as_ref();
        let domain = raw.trim().trim_start_matches('@').to_lowercase();
        if domain.is_empty() {
            return Err(AppError::InvalidConfig(format!("empty domain '{raw}'")));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidConfig(format!("invalid domain '{raw}'")));
        }
        if !cleaned.contains(&domain) {
            cleaned.push(domain);
        }
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        assert!(Mode::Usernames.includes_usernames());
        assert!(!Mode::Usernames.includes_emails());
        assert!(Mode::Emails.includes_emails());
        assert!(Mode::Both.includes_usernames() && Mode::Both.includes_emails());
    }

    #[test]
    fn test_emails_without_domain_rejected() {
        let config = GeneratorConfig {
            mode: Mode::Emails,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::MissingDomain(_))));

        let config = GeneratorConfig {
            mode: Mode::Both,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::MissingDomain(_))));
    }

    #[test]
    fn test_usernames_without_domain_ok() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_clean_domains() {
        let domains = clean_domains([" @A.com", "b.com", "a.com"]).unwrap();
        assert_eq!(domains, ["a.com", "b.com"]);
    }

    #[test]
    fn test_clean_domains_rejects_bad_values() {
        assert!(clean_domains(["  "]).is_err());
        assert!(clean_domains(["@"]).is_err());
        assert!(clean_domains(["a b.com"]).is_err());
        assert!(clean_domains(["x@y.com"]).is_err());
    }

    #[test]
    fn test_case_mode() {
        assert_eq!(CaseMode::Lower.apply("McDonald"), "mcdonald");
        assert_eq!(CaseMode::Original.apply("McDonald"), "McDonald");
        assert_eq!(CaseMode::Upper.apply("McDonald"), "MCDONALD");
    }

    #[test]
    fn test_export_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::default().to_string(), "txt");
    }
}
