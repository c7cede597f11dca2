//! # kamehandle
//!
//! Generates likely username and email handle permutations from people's
//! names, for account-provisioning checks, directory cleanup and scoped
//! defensive reconnaissance. Nothing is checked against a live system.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────┐   ┌────────────┐   ┌──────────┐   ┌──────────┐   ┌─────────┐
//! │  Name  │ → │ Normalizer │ → │Templates │ → │ Suffixes │ → │ Length  │
//! │ Parser │   │ (ascii,    │   │(profile  │   │ (1-50)   │   │ filter  │
//! └────────┘   │  case)     │   │ catalog) │   └──────────┘   └────┬────┘
//!              └────────────┘   └──────────┘                       │
//!                          ┌────────┐   ┌──────────┐   ┌─────────┐ │
//!                          │ Output │ ← │  Dedup   │ ← │ Domains │←┘
//!                          └────────┘   └──────────┘   └─────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod output;
pub mod service;

use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, NameSource};
use crate::config::{AppConfig, ObservabilityConfig};
use crate::domain::Candidate;
use crate::error::{AppError, Result};
use crate::output::Destination;
use crate::service::HandleGenerator;

/// Run kamehandle with the process arguments.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid (bad range, length, domain or template)
/// - A single `--name` is empty, or a names file yields no candidates
/// - The input file cannot be read or the output cannot be written
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;

    init_logging(&config.observability);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting kamehandle");

    execute(&cli.source()?, &config).map(|_| ())
}

/// Generate candidates for `source` and write them as configured.
///
/// Returns the number of candidates written.
///
/// # Errors
///
/// See [`run`].
pub fn execute(source: &NameSource, config: &AppConfig) -> Result<usize> {
    let generator = HandleGenerator::new(config.generator.to_generator_config()?)?;
    let settings = generator.config();

    info!(
        profile = %settings.profile,
        mode = %settings.mode,
        ascii = settings.ascii,
        domains = settings.domains.len(),
        "Generator ready"
    );
    if !settings.mode.includes_emails() && !settings.domains.is_empty() {
        warn!(mode = %settings.mode, "Domains are ignored in this mode");
    }

    let candidates = generate(&generator, source)?;
    if candidates.is_empty() {
        return Err(AppError::InvalidInput("no output generated".to_string()));
    }

    let destination = Destination::resolve(&config.output, settings.mode);
    destination.write(config.output.export, &candidates)?;

    info!(
        count = candidates.len(),
        destination = %destination,
        format = %config.output.export,
        "Saved results"
    );
    Ok(candidates.len())
}

/// Run every name of `source` through the generator.
///
/// A single name that fails is fatal; a failing line in a names file is
/// reported with its line number and skipped.
fn generate(generator: &HandleGenerator, source: &NameSource) -> Result<Vec<Candidate>> {
    match source {
        NameSource::Single(raw) => generator.generate_raw(raw),
        NameSource::File(path) => {
            let names = input::read_names(path)?;
            info!(path = %path.display(), names = names.len(), "Read names file");

            let mut candidates = Vec::new();
            for name in &names {
                match generator.generate_raw(&name.text) {
                    Ok(generated) => candidates.extend(generated),
                    Err(err) => warn!(
                        line = name.line,
                        name = %name.text,
                        error = %err,
                        "Skipping name"
                    ),
                }
            }
            Ok(candidates)
        }
    }
}

/// Initialize logging based on configuration.
///
/// Logs go to stderr so stdout carries only results.
fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
