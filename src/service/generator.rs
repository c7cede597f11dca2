//! Handle generator.
//!
//! Runs one name through the full pipeline:
//!
//! ```text
//! Name -> Normalizer -> TemplateCatalog -> suffix::expand -> length::truncate
//!      -> dedup -> (max per name) -> email::combine -> dedup
//! ```

use tracing::debug;

use crate::domain::{Candidate, GeneratorConfig, Name};
use crate::error::Result;
use crate::service::normalizer::Normalizer;
use crate::service::rules::TemplateCatalog;
use crate::service::{dedup, email, length, suffix};

/// Generates candidate handles for names under a fixed configuration.
#[derive(Debug, Clone)]
pub struct HandleGenerator {
    config: GeneratorConfig,
    normalizer: Normalizer,
    catalog: TemplateCatalog,
}

impl HandleGenerator {
    /// Create a generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is inconsistent (emails without
    /// domains) or an extra template does not parse.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let catalog = TemplateCatalog::new(config.profile, &config.patterns)?;
        Ok(Self {
            normalizer: Normalizer::new(config.ascii, config.case),
            catalog,
            config,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse a raw name and generate its candidates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is empty before or after
    /// normalization.
    pub fn generate_raw(&self, raw: &str) -> Result<Vec<Candidate>> {
        self.generate(&Name::parse(raw)?)
    }

    /// Generate the deduplicated candidates for one name.
    ///
    /// In `both` mode usernames come first, then emails.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no token survives normalization.
    pub fn generate(&self, name: &Name) -> Result<Vec<Candidate>> {
        let parts = self.normalizer.normalize(name)?;

        let usernames = self.catalog.apply(name.display(), &parts);
        let usernames = suffix::expand(usernames, self.config.numbers);
        let usernames = length::truncate(usernames, self.config.max_length);
        let mut usernames = dedup::dedup(usernames);

        if let Some(cap) = self.config.max_per_name {
            usernames.truncate(cap.get());
        }

        let mut candidates = Vec::new();
        if self.config.mode.includes_emails() {
            let emails = email::combine(&usernames, &self.config.domains);
            if self.config.mode.includes_usernames() {
                candidates.append(&mut usernames);
            }
            candidates.extend(emails);
        } else {
            candidates = usernames;
        }

        let candidates = dedup::dedup(candidates);
        debug!(name = %name, count = candidates.len(), "Generated candidates");
        Ok(candidates)
    }
}
