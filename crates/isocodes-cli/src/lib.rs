//! CLI library components for the country code sorter.

pub mod logging;
pub mod pipeline;
pub mod types;
