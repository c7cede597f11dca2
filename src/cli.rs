//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use crate::domain::{CaseMode, ExportFormat, Mode, Profile};
use crate::error::{AppError, Result};

/// Generate likely username/email permutations from names.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kamehandle",
    version,
    about = "Generate likely username/email permutations from names",
    long_about = "kamehandle - username and email handle permutations from names\n\n\
                  Intended for legitimate IT/admin tasks: account provisioning checks, \
                  directory cleanup and scoped defensive reconnaissance. \
                  No handle is checked against any live system."
)]
#[command(group(ArgGroup::new("input").required(true).args(["name", "file"])))]
pub struct Cli {
    /// Single name, e.g. "John Doe"
    #[arg(long)]
    pub name: Option<String>,

    /// Text file with one full name per line
    #[arg(long, visible_alias = "names-file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// What to generate
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Email domain (repeatable), required for emails/both
    #[arg(long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Transliterate to ASCII and strip apostrophes/hyphens
    #[arg(long)]
    pub ascii: bool,

    /// Truncate usernames to this many characters
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_length: Option<i64>,

    /// Append numeric suffixes, e.g. 1-50
    #[arg(long, value_name = "START-END")]
    pub add_numbers: Option<String>,

    /// Template preset
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Output casing
    #[arg(long, value_enum)]
    pub case: Option<CaseMode>,

    /// Extra template (repeatable), e.g. "{first}.{m}.{last}"
    #[arg(long = "pattern", value_name = "TEMPLATE")]
    pub patterns: Vec<String>,

    /// Keep at most this many usernames per name
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_per_name: Option<i64>,

    /// Output format
    #[arg(long, value_enum, visible_alias = "format")]
    pub export: Option<ExportFormat>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH", conflicts_with = "auto_output")]
    pub output: Option<PathBuf>,

    /// Write to an auto-named, timestamped file in the current directory
    #[arg(long)]
    pub auto_output: bool,

    /// TOML file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "log_level")]
    pub verbose: u8,

    /// Log format
    #[arg(long, value_parser = ["text", "json"])]
    pub log_format: Option<String>,
}

/// Where names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// A single name given on the command line.
    Single(String),
    /// A file of names, one per line.
    File(PathBuf),
}

impl Cli {
    /// Name source selected on the command line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if neither `--name` nor `--file` is set.
    pub fn source(&self) -> Result<NameSource> {
        match (&self.name, &self.file) {
            (Some(name), _) => Ok(NameSource::Single(name.clone())),
            (None, Some(path)) => Ok(NameSource::File(path.clone())),
            (None, None) => Err(AppError::InvalidInput(
                "either --name or --file is required".to_string(),
            )),
        }
    }

    /// Log level implied by `--log-level` or `-v`.
    #[must_use]
    pub fn effective_log_level(&self) -> Option<String> {
        if let Some(level) = &self.log_level {
            return Some(level.clone());
        }
        match self.verbose {
            0 => None,
            1 => Some("info".to_string()),
            2 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        }
    }
}
