use std::path::PathBuf;

use isocodes_model::SortKey;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub source: String,
    pub records: usize,
    pub unique_keys: usize,
    pub overwritten: usize,
    pub skipped: Vec<SortKey>,
    pub emitted: usize,
    /// Export path; `None` when the report went to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitResult {
    pub emitted: usize,
    pub skipped: Vec<SortKey>,
}
