//! End-to-end tests for CSV batch lookups.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use zcta_cli::frame::{FrameJob, FrameMode, read_csv, run_frame_job};
use zcta_crosswalk::ZctaResolver;
use zcta_data::TableStore;
use zcta_frame::BatchOutcome;
use zcta_model::{LookupOptions, YearGeneration};

fn resolver() -> ZctaResolver {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/json");
    ZctaResolver::new(Arc::new(TableStore::from_dir(root)))
}

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn job(input: PathBuf, output: PathBuf, column: &str, mode: FrameMode) -> FrameJob {
    let options = match mode {
        FrameMode::Zips => LookupOptions::reverse(),
        FrameMode::Zcta | FrameMode::Centroid => LookupOptions::forward(),
    };
    FrameJob {
        input,
        output: Some(output),
        column: column.to_string(),
        mode,
        target: None,
        keep_coordinates: false,
        generation: YearGeneration::Gen2020,
        options: options.suppressed(),
    }
}

#[test]
fn test_read_csv_keeps_leading_zeros() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "id,zip\n1,00501\n2,02134\n");

    let df = read_csv(&input).unwrap();
    let zip = df.column("zip").unwrap().str().unwrap();
    assert_eq!(zip.get(0), Some("00501"));
    assert_eq!(zip.get(1), Some("02134"));
}

#[test]
fn test_zcta_mode_appends_column() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "id,zip\n1,00501\n2,30301-1234\n3,99999\n");
    let output = dir.path().join("out.csv");

    let summary = run_frame_job(&resolver(), &job(input, output.clone(), "zip", FrameMode::Zcta))
        .unwrap();

    assert_eq!(summary.outcome, BatchOutcome::Applied { rows: 3, resolved: 2 });
    assert_eq!(summary.rows, 3);
    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "id,zip,zcta");
    assert_eq!(lines[1], "1,00501,11742");
    assert_eq!(lines[2], "2,30301-1234,30303");
    assert_eq!(lines[3], "3,99999,");
}

#[test]
fn test_zips_mode_joins_lists() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "zcta\n11742\n10001\n");
    let output = dir.path().join("out.csv");

    let mut job = job(input, output.clone(), "zcta", FrameMode::Zips);
    job.target = Some("zips".to_string());
    run_frame_job(&resolver(), &job).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "zcta,zips");
    assert_eq!(lines[1], "11742,00501;00544");
    assert_eq!(lines[2], "10001,10001;10118");
}

#[test]
fn test_centroid_mode_writes_coordinates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "zip\n30301\n96799\n");
    let output = dir.path().join("out.csv");

    let mut job = job(input, output.clone(), "zip", FrameMode::Centroid);
    job.keep_coordinates = true;
    let summary = run_frame_job(&resolver(), &job).unwrap();

    assert_eq!(summary.outcome.resolved(), 1);
    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "zip,coordinates,lat,lon");
    assert!(lines[1].starts_with("30301,33.7525;-84.3888,33.7525"));
    assert_eq!(lines[2], "96799,;,,");
}

#[test]
fn test_missing_column_writes_input_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "postal\n00501\n");
    let output = dir.path().join("out.csv");

    let summary =
        run_frame_job(&resolver(), &job(input, output.clone(), "zip", FrameMode::Zcta)).unwrap();

    assert_eq!(summary.outcome, BatchOutcome::MissingColumn);
    assert_eq!(fs::read_to_string(&output).unwrap(), "postal\n00501\n");
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let err = run_frame_job(
        &resolver(),
        &job(dir.path().join("absent.csv"), output, "zip", FrameMode::Zcta),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("absent.csv"));
}
