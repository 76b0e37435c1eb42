//! CSV decoding of country rows.

mod reader;

pub use reader::{CODE_COLUMN, COUNTRY_COLUMN, RecordShape, read_records};
