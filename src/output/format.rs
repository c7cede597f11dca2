//! Output formatters.

use std::io::{self, Write};

use crate::domain::{Candidate, ExportFormat};

/// Write `candidates` in `format`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_candidates<W: Write>(
    writer: &mut W,
    format: ExportFormat,
    candidates: &[Candidate],
) -> io::Result<()> {
    match format {
        ExportFormat::Txt => write_txt(writer, candidates),
        ExportFormat::Csv => write_csv(writer, candidates),
        ExportFormat::Json => write_json(writer, candidates),
    }
}

/// One handle per line.
fn write_txt<W: Write>(writer: &mut W, candidates: &[Candidate]) -> io::Result<()> {
    for candidate in candidates {
        writeln!(writer, "{}", candidate.handle)?;
    }
    Ok(())
}

/// `name,handle` header, then one row per candidate.
fn write_csv<W: Write>(writer: &mut W, candidates: &[Candidate]) -> io::Result<()> {
    writeln!(writer, "name,handle")?;
    for candidate in candidates {
        writeln!(
            writer,
            "{},{}",
            csv_field(&candidate.name),
            csv_field(&candidate.handle)
        )?;
    }
    Ok(())
}

/// Pretty-printed array of candidate records.
fn write_json<W: Write>(writer: &mut W, candidates: &[Candidate]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, candidates)?;
    writeln!(writer)
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\"")).into()
    } else {
        value.into()
    }
}
