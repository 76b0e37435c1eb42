//! Country code pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read every `(country, code)` record from the source
//! 2. **Build**: Normalize names and index them by `(length, code)`
//! 3. **Emit**: Walk keys in order, drop excluded keys, write the output
//!
//! All configuration is carried by [`PipelineConfig`], so the same stages run
//! against in-memory streams in tests and against files from the CLI.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use isocodes_ingest::{RecordShape, SourceSpec, read_records, read_source};
use isocodes_model::{ExclusionRules, Record};
use isocodes_report::{write_csv_file, write_report};
use isocodes_transform::{BuildStats, CodeTable};

use crate::types::{EmitResult, PipelineSummary};

/// Archive read when no source is given.
pub const DEFAULT_ARCHIVE: &str = "demo.zip";

/// Entry inside [`DEFAULT_ARCHIVE`] holding the country list.
pub const DEFAULT_ENTRY: &str = "iso-country-codes.csv";

/// File written by the CSV export when no path is given.
pub const DEFAULT_OUTPUT: &str = "demo.csv";

/// Where emitted entries go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Title-cased report lines on the provided writer.
    #[default]
    Report,
    /// `len,code,name` CSV written to a file, replacing any existing file.
    Csv { path: PathBuf },
}

/// Everything a pipeline run needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source: SourceSpec,
    pub shape: RecordShape,
    pub exclusions: ExclusionRules,
    pub output: OutputTarget,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: SourceSpec::archive(DEFAULT_ARCHIVE, DEFAULT_ENTRY),
            shape: RecordShape::Header,
            exclusions: ExclusionRules::default(),
            output: OutputTarget::Report,
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_source(mut self, source: SourceSpec) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: RecordShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionRules) -> Self {
        self.exclusions = exclusions;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads all records from the configured source.
pub fn ingest(config: &PipelineConfig) -> Result<Vec<Record>> {
    let span = info_span!("ingest", source = %config.source);
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_source(&config.source, config.shape)
        .with_context(|| format!("read {}", config.source))?;
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Build
// ============================================================================

/// Indexes records by `(normalized name length, code)`, last write wins.
pub fn build(records: Vec<Record>) -> (CodeTable, BuildStats) {
    let span = info_span!("build");
    let _guard = span.enter();
    let (table, stats) = CodeTable::from_records(records);
    info!(
        rows = stats.rows,
        unique_keys = table.len(),
        overwritten = stats.overwritten,
        "build complete"
    );
    (table, stats)
}

// ============================================================================
// Stage 3: Emit
// ============================================================================

/// Writes the table in key order to the configured target.
///
/// Report lines go to `out`; a CSV target writes its own file and leaves
/// `out` untouched.
pub fn emit<W: Write>(
    table: &CodeTable,
    config: &PipelineConfig,
    out: &mut W,
) -> Result<EmitResult> {
    let span = info_span!("emit");
    let _guard = span.enter();
    let emission = table.ordered_entries(&config.exclusions);
    let emitted = match &config.output {
        OutputTarget::Report => {
            write_report(out, &emission.entries).context("write report")?
        }
        OutputTarget::Csv { path } => write_csv_file(path, &emission.entries)
            .with_context(|| format!("write {}", path.display()))?,
    };
    info!(emitted, skipped = emission.skipped.len(), "emit complete");
    Ok(EmitResult {
        emitted,
        skipped: emission.skipped,
    })
}

// ============================================================================
// Runners
// ============================================================================

/// Runs all stages against the configured source.
pub fn run_pipeline<W: Write>(config: &PipelineConfig, out: &mut W) -> Result<PipelineSummary> {
    let records = ingest(config)?;
    run_records(config.source.to_string(), records, config, out)
}

/// Runs all stages against an in-memory CSV stream instead of the
/// configured source. The stream is decoded with `config.shape`.
pub fn run_from_reader<R: Read, W: Write>(
    input: R,
    config: &PipelineConfig,
    out: &mut W,
) -> Result<PipelineSummary> {
    let records = read_records(input, config.shape).context("read input stream")?;
    run_records("<stream>".to_string(), records, config, out)
}

fn run_records<W: Write>(
    source: String,
    records: Vec<Record>,
    config: &PipelineConfig,
    out: &mut W,
) -> Result<PipelineSummary> {
    let (table, stats) = build(records);
    let EmitResult { emitted, skipped } = emit(&table, config, out)?;
    let output = match &config.output {
        OutputTarget::Report => None,
        OutputTarget::Csv { path } => Some(path.clone()),
    };
    Ok(PipelineSummary {
        source,
        records: stats.rows,
        unique_keys: table.len(),
        overwritten: stats.overwritten,
        skipped,
        emitted,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_demo_constants() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.source,
            SourceSpec::archive("demo.zip", "iso-country-codes.csv")
        );
        assert_eq!(config.shape, RecordShape::Header);
        assert_eq!(config.exclusions, ExclusionRules::default());
        assert_eq!(config.output, OutputTarget::Report);
    }
}
