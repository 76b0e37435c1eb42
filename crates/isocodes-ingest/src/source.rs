//! Input sources: plain CSV files and entries inside zip archives.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use isocodes_model::Record;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::csv::{RecordShape, read_records};
use crate::error::{IngestError, Result};

/// Where the country CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A CSV file on disk.
    File { path: PathBuf },
    /// A named entry inside a zip archive.
    Archive { path: PathBuf, entry: String },
}

impl SourceSpec {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    pub fn archive(path: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self::Archive {
            path: path.into(),
            entry: entry.into(),
        }
    }

    /// Path of the file opened on disk.
    pub fn path(&self) -> &Path {
        match self {
            Self::File { path } | Self::Archive { path, .. } => path,
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{}", path.display()),
            Self::Archive { path, entry } => write!(f, "{}!{}", path.display(), entry),
        }
    }
}

/// Reads all records from the given source.
///
/// Every handle opened here is dropped before returning, including when
/// decoding fails part way through.
pub fn read_source(source: &SourceSpec, shape: RecordShape) -> Result<Vec<Record>> {
    let records = match source {
        SourceSpec::File { path } => {
            tracing::debug!(path = %path.display(), "opening CSV file");
            let file = open_file(path)?;
            read_records(BufReader::new(file), shape)?
        }
        SourceSpec::Archive { path, entry } => read_archive_entry(path, entry, shape)?,
    };
    tracing::info!(source = %source, records = records.len(), "read source records");
    Ok(records)
}

fn read_archive_entry(path: &Path, entry: &str, shape: RecordShape) -> Result<Vec<Record>> {
    tracing::debug!(path = %path.display(), entry, "opening archive entry");
    let file = open_file(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| IngestError::Archive {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = match archive.by_name(entry) {
        Ok(reader) => reader,
        Err(ZipError::FileNotFound) => {
            return Err(IngestError::EntryNotFound {
                path: path.to_path_buf(),
                entry: entry.to_string(),
            });
        }
        Err(e) => {
            return Err(IngestError::Archive {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    read_records(reader, shape)
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SourceSpec::file("codes.csv").to_string(), "codes.csv");
        assert_eq!(
            SourceSpec::archive("demo.zip", "iso-country-codes.csv").to_string(),
            "demo.zip!iso-country-codes.csv"
        );
    }

    #[test]
    fn test_missing_file() {
        let source = SourceSpec::file("/nonexistent/isocodes/codes.csv");
        let result = read_source(&source, RecordShape::Header);

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_archive() {
        let source = SourceSpec::archive("/nonexistent/isocodes/demo.zip", "codes.csv");
        let result = read_source(&source, RecordShape::Header);

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
