//! Configuration management module.
//!
//! Settings are layered (later sources override earlier):
//! 1. Built-in defaults
//! 2. An optional TOML file given with `--config`
//! 3. Command-line flags
//!
//! Environment variables are not consulted.

mod generator;
mod output;

use config::{Config, File, FileFormat};
use serde::Deserialize;

pub use generator::GeneratorSettings;
pub use output::OutputSettings;

use crate::cli::Cli;
use crate::error::{AppError, Result};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Handle generation settings.
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSettings,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from the optional config file and the command line.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the config file cannot be read and `InvalidConfig` if
    /// it is malformed or holds unknown values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = &cli.config {
            let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
            builder = builder.add_source(File::from_str(&content, FileFormat::Toml));
        }

        let domains = (!cli.domains.is_empty()).then(|| cli.domains.clone());
        let patterns = (!cli.patterns.is_empty()).then(|| cli.patterns.clone());

        let config = builder
            .set_override_option("generator.profile", cli.profile.map(|p| p.to_string()))?
            .set_override_option("generator.mode", cli.mode.map(|m| m.to_string()))?
            .set_override_option("generator.domains", domains)?
            .set_override_option("generator.ascii", cli.ascii.then_some(true))?
            .set_override_option("generator.case", cli.case.map(|c| c.to_string()))?
            .set_override_option("generator.max_length", cli.max_length)?
            .set_override_option("generator.add_numbers", cli.add_numbers.clone())?
            .set_override_option("generator.patterns", patterns)?
            .set_override_option("generator.max_per_name", cli.max_per_name)?
            .set_override_option("output.export", cli.export.map(|e| e.to_string()))?
            .set_override_option(
                "output.path",
                cli.output
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("output.auto", cli.auto_output.then_some(true))?
            .set_override_option("observability.log_level", cli.effective_log_level())?
            .set_override_option("observability.log_format", cli.log_format.clone())?
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(AppError::InvalidConfig(format!(
                "observability.log_format must be 'text' or 'json', got '{}'",
                self.observability.log_format
            )));
        }

        if self.output.auto && self.output.path.is_some() {
            return Err(AppError::InvalidConfig(
                "output.path and output.auto are mutually exclusive".to_string(),
            ));
        }

        // Surface generator errors before any name is processed.
        self.generator.to_generator_config()?;

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::domain::{ExportFormat, Mode, Profile};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kamehandle").chain(args.iter().copied())).unwrap()
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.generator.profile, Profile::Common);
        assert_eq!(config.output.export, ExportFormat::Txt);
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_load_from_cli_only() {
        let config = AppConfig::load(&cli(&[
            "--name",
            "Ann Lee",
            "--mode",
            "emails",
            "--domain",
            "a.com",
            "--profile",
            "minimal",
            "--max-length",
            "8",
        ]))
        .unwrap();
        assert_eq!(config.generator.mode, Mode::Emails);
        assert_eq!(config.generator.domains, ["a.com"]);
        assert_eq!(config.generator.profile, Profile::Minimal);
        assert_eq!(config.generator.max_length, Some(8));
    }

    #[test]
    fn test_file_then_cli_override() {
        let file = config_file(
            r#"
[generator]
profile = "wide"
mode = "both"
domains = ["corp.example"]
add_numbers = "1-3"

[output]
export = "csv"
"#,
        );
        let path = file.path().to_str().unwrap();

        let config = AppConfig::load(&cli(&["--name", "a b", "--config", path])).unwrap();
        assert_eq!(config.generator.profile, Profile::Wide);
        assert_eq!(config.generator.domains, ["corp.example"]);
        assert_eq!(config.output.export, ExportFormat::Csv);

        let config = AppConfig::load(&cli(&[
            "--name",
            "a b",
            "--config",
            path,
            "--profile",
            "minimal",
            "--domain",
            "other.example",
        ]))
        .unwrap();
        assert_eq!(config.generator.profile, Profile::Minimal);
        assert_eq!(config.generator.domains, ["other.example"]);
        assert_eq!(config.generator.add_numbers.as_deref(), Some("1-3"));
    }

    #[test]
    fn test_unknown_profile_in_file() {
        let file = config_file("[generator]\nprofile = \"huge\"\n");
        let err = AppConfig::load(&cli(&[
            "--name",
            "a b",
            "--config",
            file.path().to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = AppConfig::load(&cli(&["--name", "a b", "--config", "/nonexistent/k.toml"]))
            .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_generator_errors_surface_on_load() {
        let err = AppConfig::load(&cli(&["--name", "a b", "--add-numbers", "1-0"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));

        let err = AppConfig::load(&cli(&["--name", "a b", "--max-length", "0"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));

        let err = AppConfig::load(&cli(&["--name", "a b", "--mode", "both"])).unwrap_err();
        assert!(matches!(err, AppError::MissingDomain(_)));
    }

    #[test]
    fn test_auto_output_and_path_exclusive_in_file() {
        let file = config_file("[output]\npath = \"out.txt\"\nauto = true\n");
        let err = AppConfig::load(&cli(&[
            "--name",
            "a b",
            "--config",
            file.path().to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
