//! Generator settings.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::domain::{CaseMode, GeneratorConfig, Mode, NumberRange, Profile, clean_domains};
use crate::error::{AppError, Result};

/// Raw generator settings as read from the config file and command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorSettings {
    /// Template preset.
    #[serde(default)]
    pub profile: Profile,

    /// What to generate.
    #[serde(default)]
    pub mode: Mode,

    /// Email domains.
    #[serde(default)]
    pub domains: Vec<String>,

    /// ASCII transliteration.
    #[serde(default)]
    pub ascii: bool,

    /// Output casing.
    #[serde(default)]
    pub case: CaseMode,

    /// Maximum username length.
    #[serde(default)]
    pub max_length: Option<i64>,

    /// Numeric suffix range, `start-end`.
    #[serde(default)]
    pub add_numbers: Option<String>,

    /// Extra templates.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Maximum usernames per name.
    #[serde(default)]
    pub max_per_name: Option<i64>,
}

impl GeneratorSettings {
    /// Validate these settings into a generator configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a non-positive length or cap or a bad
    /// domain, `InvalidRange` for a bad suffix range, and `MissingDomain` when
    /// emails are requested without domains.
    pub fn to_generator_config(&self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig {
            profile: self.profile,
            mode: self.mode,
            ascii: self.ascii,
            case: self.case,
            max_length: positive("max_length", self.max_length)?,
            numbers: self.add_numbers.as_deref().map(str::parse::<NumberRange>).transpose()?,
            domains: clean_domains(&self.domains)?,
            patterns: self.patterns.clone(),
            max_per_name: positive("max_per_name", self.max_per_name)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Check an optional setting is a positive integer.
fn positive(key: &str, value: Option<i64>) -> Result<Option<NonZeroUsize>> {
    let Some(value) = value else {
        return Ok(None);
    };
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .map(Some)
        .ok_or_else(|| AppError::InvalidConfig(format!("{key} must be positive, got {value}")))
}
