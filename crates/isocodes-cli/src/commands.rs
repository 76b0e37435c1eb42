use std::io;

use anyhow::Result;
use tracing::info_span;

use isocodes_cli::pipeline::{OutputTarget, PipelineConfig, run_pipeline};
use isocodes_cli::types::PipelineSummary;
use isocodes_ingest::{RecordShape, SourceSpec};
use isocodes_model::ExclusionRules;

use crate::cli::{ExportArgs, SourceArgs};

pub fn run_report(args: &SourceArgs) -> Result<PipelineSummary> {
    let config = pipeline_config(args, OutputTarget::Report);
    let span = info_span!("report", source = %config.source);
    let _guard = span.enter();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_pipeline(&config, &mut out)
}

pub fn run_export(args: &ExportArgs) -> Result<PipelineSummary> {
    let config = pipeline_config(
        &args.source,
        OutputTarget::Csv {
            path: args.output.clone(),
        },
    );
    let span = info_span!(
        "export",
        source = %config.source,
        output = %args.output.display()
    );
    let _guard = span.enter();
    run_pipeline(&config, &mut io::sink())
}

fn pipeline_config(args: &SourceArgs, output: OutputTarget) -> PipelineConfig {
    let source = match &args.input {
        Some(path) => SourceSpec::file(path),
        None => SourceSpec::archive(&args.archive, &args.entry),
    };
    let shape = if args.positional {
        RecordShape::Positional
    } else {
        RecordShape::Header
    };
    let mut exclusions = if args.no_default_exclusions {
        ExclusionRules::none()
    } else {
        ExclusionRules::default()
    };
    exclusions.extend(args.exclude.iter().cloned());

    PipelineConfig::default()
        .with_source(source)
        .with_shape(shape)
        .with_exclusions(exclusions)
        .with_output(output)
}
