//! Error types for country code ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading country records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file or archive not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Archive Errors ===
    /// The archive could not be opened or an entry could not be read.
    #[error("failed to read archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The named entry is not present in the archive.
    #[error("entry '{entry}' not found in archive {path}")]
    EntryNotFound { path: PathBuf, entry: String },

    // === CSV Errors ===
    /// The stream has no header row.
    #[error("CSV input is empty")]
    EmptyInput,

    /// A required column is missing from the header row.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    /// A positional row has the wrong number of fields.
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The CSV parser rejected the input.
    #[error("failed to parse CSV{}: {message}", line_suffix(.line))]
    Csv { line: Option<u64>, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            line: err.position().map(csv::Position::line),
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
