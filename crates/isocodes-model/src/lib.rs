//! Shared types for the country code pipeline.
//!
//! - [`Record`]: one `(name, code)` row as read from the source CSV
//! - [`SortKey`]: the `(name length, code)` pair used to index and order entries
//! - [`ExclusionRules`]: keys that are never emitted

pub mod error;
pub mod exclusion;
pub mod key;
pub mod record;

pub use error::{ModelError, Result};
pub use exclusion::{ExclusionRules, HOLY_SEE_DUPLICATE};
pub use key::{CodeEntry, SortKey};
pub use record::Record;
