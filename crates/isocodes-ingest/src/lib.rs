//! Country code ingestion.
//!
//! This crate reads `(country, code)` rows from a CSV stream, whether the
//! stream is a plain file on disk or a named entry inside a zip archive.
//!
//! # Record shapes
//!
//! - **Header**: the first row names the columns; `country` and `code` are
//!   looked up by name and any other columns are ignored.
//! - **Positional**: the first row is discarded and every following row must
//!   hold exactly two fields, `(name, code)`.
//!
//! # Example
//!
//! ```ignore
//! use isocodes_ingest::{RecordShape, SourceSpec, read_source};
//!
//! let source = SourceSpec::archive("demo.zip", "iso-country-codes.csv");
//! let records = read_source(&source, RecordShape::Header)?;
//! ```

mod csv;
mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{CODE_COLUMN, COUNTRY_COLUMN, RecordShape, read_records};

// === Sources ===
pub use source::{SourceSpec, read_source};
