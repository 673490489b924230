//! End-to-end runs of the converter against the bundled templates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wincc_cli::commands::{ConvertJob, run_convert};
use wincc_cli::progress::StageProgress;
use wincc_ingest::{SourceTable, read_table};
use wincc_model::{ConversionError, ConversionRequest, ConverterConfig, TagFilter};

const POINTS: &str = "\
Designation,PointType,IOType_0,IOType_3,IOType_5,IOType_6,FunctionalHierarchy,DefaultText,Unit,Decimals,Path
020,Area,,,,,,Raw mill area,,,ECS:020
020BE010M01,Unimotor,994.DB100,,IO,100.0,020,Belt drive,Acesys.Unit.kW,1,ECS:020BE010M01
020BE010M01INT01,Interlock,994,12.0,,,020/020BE010M01,Belt drift,,,ECS:020BE010M01:INT01
020BE020M01,Unimotor,994.DB101,,IO.SIMNONE,101.0,020,Spare drive,Acesys.Unit.kW,1,ECS:020BE020M01
020FN030M01,Unimotor,995.DB102,,IO,102.0,020,Fan drive,Acesys.Unit.kW,0,ECS:020FN030M01
";

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resources/templates")
}

fn job(dir: &TempDir, output: &str) -> ConvertJob {
    let input = dir.path().join("Points.csv");
    fs::write(&input, POINTS).expect("write points");
    let mut config = ConverterConfig::default();
    config.templates.dir = templates_dir();
    ConvertJob {
        request: ConversionRequest {
            input,
            output: dir.path().join(output),
            filter: TagFilter::default(),
        },
        config,
        dry_run: false,
    }
}

fn cell<'a>(table: &'a SourceTable, row: usize, column: &str) -> &'a str {
    let index = table
        .headers
        .iter()
        .position(|header| header == column)
        .expect("column present");
    &table.rows[row][index]
}

#[test]
fn converts_motor_with_interlock_to_csv() {
    let dir = TempDir::new().expect("tempdir");
    let job = job(&dir, "tags_wincc.csv");
    let result = run_convert(&job, &StageProgress::hidden()).expect("conversion");

    assert_eq!(result.outcome.matched, 2);
    assert_eq!(result.outcome.skipped_simulated, 1);
    assert_eq!(result.outcome.tags.len(), 1);
    assert_eq!(result.outcome.interlock_count(), 1);
    assert_eq!(result.written.as_deref(), Some(job.request.output.as_path()));
    assert_eq!(result.rows_written(), 4);

    let written = read_table(&job.request.output).expect("read output");
    assert_eq!(written.rows.len(), 4);
    assert_eq!(cell(&written, 0, "Name"), "020BE010M01_CMD");
    assert_eq!(cell(&written, 0, "Connection"), "PLC_994");
    assert_eq!(cell(&written, 0, "Address"), "%DB100.DBW0");
    assert_eq!(
        cell(&written, 0, "Comment [en-US]"),
        "020 Raw mill area / Belt drive command"
    );
    assert_eq!(cell(&written, 2, "PLC tag"), "020BE010M01.MSW.VALUE");
    assert_eq!(
        cell(&written, 2, "Comment [en-US]"),
        "Belt drive current kW [s999999.9]"
    );
    assert_eq!(cell(&written, 3, "Name"), "020BE010M01_INT01");
    assert_eq!(cell(&written, 3, "Address"), "%M12");
    assert_eq!(cell(&written, 3, "Comment [en-US]"), "Belt drift");
    for row in 0..written.rows.len() {
        assert_eq!(cell(&written, row, "Limit Upper 2 Type"), "None");
        assert_eq!(cell(&written, row, "Limit Lower 2 Type"), "None");
    }
}

#[test]
fn writes_workbook_output() {
    let dir = TempDir::new().expect("tempdir");
    let job = job(&dir, "tags_wincc.xlsx");
    run_convert(&job, &StageProgress::hidden()).expect("conversion");

    let written = read_table(&job.request.output).expect("read workbook");
    assert_eq!(written.rows.len(), 4);
    assert_eq!(cell(&written, 1, "Name"), "020BE010M01_STS");
}

#[test]
fn dry_run_skips_writing() {
    let dir = TempDir::new().expect("tempdir");
    let mut job = job(&dir, "tags_wincc.csv");
    job.dry_run = true;
    let result = run_convert(&job, &StageProgress::hidden()).expect("conversion");

    assert!(result.written.is_none());
    assert_eq!(result.rows_written(), 0);
    assert_eq!(result.outcome.table.len(), 4);
    assert!(!job.request.output.exists());
}

#[test]
fn zero_matches_write_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let mut job = job(&dir, "tags_wincc.csv");
    job.request.filter.plc = "999".to_string();
    let result = run_convert(&job, &StageProgress::hidden()).expect("conversion");

    assert!(result.outcome.is_empty());
    assert!(result.written.is_none());
    assert!(!job.request.output.exists());
}

#[test]
fn missing_templates_abort_before_reading_tags() {
    let dir = TempDir::new().expect("tempdir");
    let mut job = job(&dir, "tags_wincc.csv");
    job.config.templates.dir = dir.path().join("no-templates");
    let error = run_convert(&job, &StageProgress::hidden()).expect_err("missing templates");

    assert!(matches!(
        error.downcast_ref::<ConversionError>(),
        Some(ConversionError::TemplateMissing { .. })
    ));
    assert!(format!("{error:#}").starts_with("open templates in"));
}

#[test]
fn invalid_request_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let mut job = job(&dir, "tags_wincc.csv");
    job.request.filter.point_type = String::new();
    let error = run_convert(&job, &StageProgress::hidden()).expect_err("invalid request");

    assert!(matches!(
        error.downcast_ref::<ConversionError>(),
        Some(ConversionError::InvalidRequest { .. })
    ));
}

#[test]
fn progress_advances_through_every_stage() {
    let dir = TempDir::new().expect("tempdir");
    let job = job(&dir, "tags_wincc.csv");
    let progress = StageProgress::hidden();
    run_convert(&job, &progress).expect("conversion");
    assert_eq!(progress.position(), 4);
}
