//! Error handling module.
//!
//! This module provides the unified error type for the generator pipeline and
//! maps every error kind onto a stable process exit code.

pub mod codes;

use std::path::{Path, PathBuf};

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Empty or unparseable name.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed or inverted numeric range.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Email output requested without any domain.
    #[error("Mode '{0}' requires at least one --domain (e.g. --domain example.com)")]
    MissingDomain(String),

    /// Unreadable input or unwritable output.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was working on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::INVALID_INPUT,
            Self::InvalidRange(_) => ErrorCode::INVALID_RANGE,
            Self::InvalidConfig(_) => ErrorCode::INVALID_CONFIG,
            Self::MissingDomain(_) => ErrorCode::MISSING_DOMAIN,
            Self::Io { .. } => ErrorCode::IO_ERROR,
        }
    }

    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_status()
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidInput("test".to_string()).error_code(),
            ErrorCode::INVALID_INPUT
        );
        assert_eq!(
            AppError::MissingDomain("emails".to_string()).error_code(),
            ErrorCode::MISSING_DOMAIN
        );
        assert_eq!(
            AppError::io("out.txt", std::io::Error::other("boom")).error_code(),
            ErrorCode::IO_ERROR
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            AppError::InvalidInput(String::new()),
            AppError::InvalidRange(String::new()),
            AppError::InvalidConfig(String::new()),
            AppError::MissingDomain(String::new()),
            AppError::io("x", std::io::Error::other("boom")),
        ];
        let codes: std::collections::HashSet<u8> =
            errors.iter().map(AppError::exit_code).collect();
        assert!(codes.iter().all(|&c| c > 1));
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_io_message_names_path() {
        let err = AppError::io(
            "/nope/names.txt",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("/nope/names.txt"));
    }

    #[test]
    fn test_config_error_maps_to_invalid_config() {
        let err: AppError = config::ConfigError::Message("bad profile".to_string()).into();
        assert!(matches!(err, AppError::InvalidConfig(ref m) if m.contains("bad profile")));
    }
}
