//! Country code transformation.
//!
//! - **name**: comma reversal of `"LAST, FIRST"` official names
//! - **table**: the `(length, code)`-indexed table with last-write-wins upserts
//! - **emission**: ordered traversal with exclusion rules applied
//! - **case**: title casing for the printed report

pub mod case;
pub mod emission;
pub mod name;
pub mod table;

pub use case::title_case;
pub use emission::Emission;
pub use name::normalize_name;
pub use table::{BuildStats, CodeTable};
