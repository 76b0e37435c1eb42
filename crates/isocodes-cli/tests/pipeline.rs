//! Integration tests for the pipeline module.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use isocodes_cli::pipeline::{OutputTarget, PipelineConfig, run_from_reader, run_pipeline};
use isocodes_cli::types::PipelineSummary;
use isocodes_ingest::{IngestError, RecordShape, SourceSpec};
use isocodes_model::{ExclusionRules, SortKey};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const HOLY_SEE_ROWS: &str = "country,code\n\
    ITALY,IT\n\
    \"HOLY SEE (VATICAN CITY STATE)\",VA\n\
    \"(VATICAN CITY STATE), HOLY SEE\",VA\n\
    \"KOREA, REPUBLIC OF\",KR\n";

fn run_report(input: &str, config: &PipelineConfig) -> (String, PipelineSummary) {
    let mut out = Vec::new();
    let summary = run_from_reader(input.as_bytes(), config, &mut out).expect("run pipeline");
    (String::from_utf8(out).expect("utf8 report"), summary)
}

fn write_archive(path: &Path, entry: &str, contents: &str) {
    let file = File::create(path).expect("create archive");
    let mut writer = ZipWriter::new(file);
    writer
        .start_file(entry, SimpleFileOptions::default())
        .expect("start entry");
    writer.write_all(contents.as_bytes()).expect("write entry");
    writer.finish().expect("finish archive");
}

#[test]
fn report_for_italy_and_korea() {
    let input = "country,code\nItaly,IT\n\"Korea, Republic Of\",KR\n";
    let (report, summary) = run_report(input, &PipelineConfig::default());

    assert_eq!(report, " 5: Italy (IT)\n17: Republic Of Korea (KR)\n");
    assert_eq!(summary.records, 2);
    assert_eq!(summary.unique_keys, 2);
    assert_eq!(summary.emitted, 2);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.output, None);
}

#[test]
fn holy_see_duplicates_collapse_and_are_skipped() {
    let (report, summary) = run_report(HOLY_SEE_ROWS, &PipelineConfig::default());

    assert_eq!(report, " 5: Italy (IT)\n17: Republic Of Korea (KR)\n");
    assert_eq!(summary.records, 4);
    assert_eq!(summary.overwritten, 1);
    assert_eq!(summary.skipped, vec![SortKey::new(29, "VA")]);
    assert!(!report.contains("(VA)"));
}

#[test]
fn holy_see_is_emitted_without_exclusions() {
    let config = PipelineConfig::default().with_exclusions(ExclusionRules::none());
    let (report, _) = run_report(HOLY_SEE_ROWS, &config);

    assert_eq!(
        report,
        " 5: Italy (IT)\n\
         17: Republic Of Korea (KR)\n\
         29: Holy See (Vatican City State) (VA)\n"
    );
}

#[test]
fn positional_mode_skips_first_row() {
    let config = PipelineConfig::default().with_shape(RecordShape::Positional);
    let input = "name,iso\nPeru,PE\nItaly,IT\nChad,TD\n";
    let (report, summary) = run_report(input, &config);

    assert_eq!(report, " 4: Peru (PE)\n 4: Chad (TD)\n 5: Italy (IT)\n");
    assert_eq!(summary.records, 3);
}

#[test]
fn report_from_archive_source() {
    let dir = tempfile::tempdir().expect("temp dir");
    let archive = dir.path().join("demo.zip");
    write_archive(&archive, "iso-country-codes.csv", HOLY_SEE_ROWS);
    let config = PipelineConfig::default()
        .with_source(SourceSpec::archive(&archive, "iso-country-codes.csv"));

    let mut out = Vec::new();
    let summary = run_pipeline(&config, &mut out).expect("run pipeline");

    assert_eq!(
        String::from_utf8(out).unwrap(),
        " 5: Italy (IT)\n17: Republic Of Korea (KR)\n"
    );
    assert_eq!(
        summary.source,
        format!("{}!iso-country-codes.csv", archive.display())
    );
}

#[test]
fn export_writes_csv_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("codes.csv");
    let output = dir.path().join("demo.csv");
    fs::write(&input, HOLY_SEE_ROWS).expect("write input");
    let config = PipelineConfig::default()
        .with_source(SourceSpec::file(&input))
        .with_output(OutputTarget::Csv {
            path: output.clone(),
        });

    let mut out = Vec::new();
    let summary = run_pipeline(&config, &mut out).expect("run pipeline");

    assert!(out.is_empty());
    assert_eq!(summary.output, Some(output.clone()));
    assert_eq!(summary.emitted, 2);
    let contents = fs::read_to_string(&output).expect("read export");
    assert_eq!(
        contents,
        "len,code,name\n5,IT,ITALY\n17,KR,REPUBLIC OF KOREA\n"
    );
}

#[test]
fn missing_archive_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = PipelineConfig::default()
        .with_source(SourceSpec::archive(dir.path().join("demo.zip"), "codes.csv"));

    let error = run_pipeline(&config, &mut Vec::new()).expect_err("missing archive");

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn malformed_positional_row_is_fatal() {
    let config = PipelineConfig::default().with_shape(RecordShape::Positional);
    let mut out = Vec::new();

    let error = run_from_reader("name,iso\nPeru,PE,604\n".as_bytes(), &config, &mut out)
        .expect_err("malformed row");

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::MalformedRow { found: 3, .. })
    ));
    assert!(out.is_empty());
}
