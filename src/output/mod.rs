//! Result output.
//!
//! Candidates go to stdout, to a given file, or to an auto-named file
//! `kamehandle_<mode>_<YYYYmmdd_HHMMSS>.<ext>` in the current directory.

pub mod format;

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::OutputSettings;
use crate::domain::{Candidate, ExportFormat, Mode};
use crate::error::{AppError, Result};

pub use format::write_candidates;

/// Where results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl Destination {
    /// Pick the destination from output settings.
    #[must_use]
    pub fn resolve(settings: &OutputSettings, mode: Mode) -> Self {
        match &settings.path {
            Some(path) => Self::File(path.clone()),
            None if settings.auto => Self::File(default_output_name(mode, settings.export)),
            None => Self::Stdout,
        }
    }

    /// Write candidates here.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the destination cannot be created or written.
    pub fn write(&self, format: ExportFormat, candidates: &[Candidate]) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                write_and_flush(&mut out, format, candidates)
                    .map_err(|e| AppError::io("<stdout>", e))
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|e| AppError::io(path, e))?;
                let mut out = BufWriter::new(file);
                write_and_flush(&mut out, format, candidates)
                    .map_err(|e| AppError::io(path, e))
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", absolute(path).display()),
        }
    }
}

fn write_and_flush<W: Write>(
    out: &mut W,
    format: ExportFormat,
    candidates: &[Candidate],
) -> io::Result<()> {
    write_candidates(out, format, candidates)?;
    out.flush()
}

/// Timestamped file name for `--auto-output`.
#[must_use]
pub fn default_output_name(mode: Mode, format: ExportFormat) -> PathBuf {
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("kamehandle_{mode}_{ts}.{}", format.extension()))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve() {
        let settings = OutputSettings::default();
        assert_eq!(Destination::resolve(&settings, Mode::Usernames), Destination::Stdout);

        let settings = OutputSettings {
            path: Some(PathBuf::from("out.csv")),
            ..Default::default()
        };
        assert_eq!(
            Destination::resolve(&settings, Mode::Usernames),
            Destination::File(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_default_output_name() {
        let name = default_output_name(Mode::Emails, ExportFormat::Csv);
        let name = name.to_str().unwrap();
        assert!(name.starts_with("kamehandle_emails_"));
        assert!(name.ends_with(".csv"));
        // kamehandle_emails_ + YYYYmmdd_HHMMSS + .csv
        assert_eq!(name.len(), "kamehandle_emails_".len() + 15 + 4);
    }

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let candidates = vec![Candidate::username("Ann Lee", "alee", "{f}{last}")];

        Destination::File(path.clone())
            .write(ExportFormat::Txt, &candidates)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alee\n");
    }

    #[test]
    fn test_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = Destination::File(path)
            .write(ExportFormat::Txt, &[])
            .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
