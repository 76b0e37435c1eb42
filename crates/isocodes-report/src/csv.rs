//! CSV export of the sorted table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use isocodes_model::CodeEntry;

use crate::error::{ReportError, Result};

/// Header row of the exported CSV.
pub const CSV_HEADER: [&str; 3] = ["len", "code", "name"];

/// Writes the header and one `len,code,name` row per entry.
///
/// Names are written exactly as stored; no title casing is applied.
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(out: W, entries: &[CodeEntry<'_>]) -> Result<usize> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        let length = entry.length().to_string();
        writer.write_record([length.as_str(), entry.code(), entry.name])?;
    }
    writer.flush()?;
    Ok(entries.len())
}

/// Creates (or truncates) `path` and writes the CSV export into it.
///
/// A failure part way through leaves the partially written file in place.
pub fn write_csv_file(path: &Path, entries: &[CodeEntry<'_>]) -> Result<usize> {
    let file = File::create(path).map_err(|e| ReportError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rows = write_csv(BufWriter::new(file), entries)?;
    tracing::info!(path = %path.display(), rows, "wrote CSV export");
    Ok(rows)
}
