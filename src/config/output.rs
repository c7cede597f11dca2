//! Output settings.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::ExportFormat;

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    /// Output format.
    #[serde(default)]
    pub export: ExportFormat,

    /// Output file; stdout when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Write to a timestamped file in the current directory.
    #[serde(default)]
    pub auto: bool,
}
