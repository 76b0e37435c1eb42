//! Human-readable report lines.

use std::io::Write;

use isocodes_model::CodeEntry;
use isocodes_transform::title_case;

use crate::error::Result;

/// Formats one report line: length right-aligned to width 2, title-cased
/// name, code in parentheses.
pub fn format_report_line(entry: &CodeEntry<'_>) -> String {
    format!(
        "{:>2}: {} ({})",
        entry.length(),
        title_case(entry.name),
        entry.code()
    )
}

/// Writes one report line per entry and returns the number of lines written.
pub fn write_report<W: Write>(out: &mut W, entries: &[CodeEntry<'_>]) -> Result<usize> {
    let mut written = 0usize;
    for entry in entries {
        writeln!(out, "{}", format_report_line(entry))?;
        written += 1;
    }
    out.flush()?;
    tracing::debug!(lines = written, "wrote report");
    Ok(written)
}
