//! CSV stream decoding with header or positional record shapes.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use isocodes_model::Record;

use crate::error::{IngestError, Result};

/// Header name of the country name column.
pub const COUNTRY_COLUMN: &str = "country";

/// Header name of the ISO code column.
pub const CODE_COLUMN: &str = "code";

const POSITIONAL_FIELDS: usize = 2;

/// How rows are mapped onto [`Record`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordShape {
    /// Columns are addressed by the `country` and `code` header names.
    #[default]
    Header,
    /// The first row is skipped; rows are read as `(name, code)` by position.
    Positional,
}

/// Reads every record from a CSV stream.
///
/// The stream is consumed to completion and dropped before returning, on
/// success and on error alike. Field values are kept exactly as read.
pub fn read_records<R: Read>(input: R, shape: RecordShape) -> Result<Vec<Record>> {
    let records = match shape {
        RecordShape::Header => read_header_records(input)?,
        RecordShape::Positional => read_positional_records(input)?,
    };
    tracing::debug!(?shape, records = records.len(), "decoded CSV records");
    Ok(records)
}

fn read_header_records<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    for column in [COUNTRY_COLUMN, CODE_COLUMN] {
        if !has_column(&headers, column) {
            return Err(IngestError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }
    Ok(records)
}

fn read_positional_records<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut rows = reader.records();

    // First row is assumed to be a header and never inspected.
    match rows.next() {
        Some(first) => {
            first?;
        }
        None => return Err(IngestError::EmptyInput),
    }

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        if row.len() != POSITIONAL_FIELDS {
            return Err(IngestError::MalformedRow {
                line: row.position().map_or(0, csv::Position::line),
                expected: POSITIONAL_FIELDS,
                found: row.len(),
            });
        }
        records.push(Record::new(&row[0], &row[1]));
    }
    Ok(records)
}

fn has_column(headers: &StringRecord, column: &str) -> bool {
    headers
        .iter()
        .any(|header| header.trim_start_matches('\u{feff}') == column)
}
