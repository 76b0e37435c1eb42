//! Country code output generation.
//!
//! - **Report**: one `NN: Name (CODE)` line per entry, names title-cased
//! - **CSV**: `len,code,name` rows with names exactly as stored

mod csv;
mod error;
mod text;

pub use self::csv::{CSV_HEADER, write_csv, write_csv_file};
pub use error::{ReportError, Result};
pub use text::{format_report_line, write_report};
