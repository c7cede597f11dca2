//! Names file reader.

use std::path::Path;

use crate::error::{AppError, Result};

/// One name read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLine {
    /// 1-based line number.
    pub line: usize,
    /// Line text, trimmed.
    pub text: String,
}

/// Read names from a UTF-8 file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read or is not valid UTF-8.
pub fn read_names(path: &Path) -> Result<Vec<NameLine>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    Ok(parse_names(&content))
}

/// Split file content into name lines.
#[must_use]
pub fn parse_names(content: &str) -> Vec<NameLine> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let text = line.trim();
            (!text.is_empty() && !text.starts_with('#')).then(|| NameLine {
                line: idx + 1,
                text: text.to_string(),
            })
        })
        .collect()
}
