//! Integration tests for the CLI lookup workflow.
//!
//! These tests run the compiled `geotz` binary against temporary data files
//! and validate its stdout and exit codes end to end.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Write a two-zone index + name file pair into a temp dir.
///
/// Keys are real precision-5 geohashes: sv9h9 = Jerusalem, u2edk = Vienna.
fn write_sample_data(dir: &TempDir) -> (PathBuf, PathBuf) {
    let index_path = dir.path().join("geotz-index.dat");
    let names_path = dir.path().join("geotz-names.dat");

    let mut index = Vec::new();
    for record in ["sv9h9001", "u2edk002"] {
        index.extend_from_slice(record.as_bytes());
        index.push(b'\n');
    }
    fs::write(&index_path, index).expect("write index");
    fs::write(&names_path, "Asia/Jerusalem\nEurope/Vienna\n").expect("write names");

    (index_path, names_path)
}

fn run_geotz(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_geotz"))
        .args(args)
        .output()
        .expect("failed to run geotz binary")
}

#[test]
fn test_lookup_indexed_coordinate() {
    let dir = TempDir::new().expect("temp dir");
    let (index_path, names_path) = write_sample_data(&dir);

    let output = run_geotz(&[
        "--lat", "48.2082",
        "--lon", "16.3738",
        "--index", index_path.to_str().unwrap(),
        "--names", names_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "lookup should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Europe/Vienna");
}

#[test]
fn test_lookup_fallback_coordinate() {
    let dir = TempDir::new().expect("temp dir");
    let (index_path, names_path) = write_sample_data(&dir);

    let output = run_geotz(&[
        "--lat", "-40.0",
        "--lon", "-140.0",
        "--index", index_path.to_str().unwrap(),
        "--names", names_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "fallback lookup should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Etc/GMT+9");
}

#[test]
fn test_missing_data_file_exits_nonzero() {
    let dir = TempDir::new().expect("temp dir");
    let (_, names_path) = write_sample_data(&dir);

    let output = run_geotz(&[
        "--lat", "0",
        "--lon", "0",
        "--index", dir.path().join("missing.dat").to_str().unwrap(),
        "--names", names_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success(), "missing index must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load timezone data"),
        "stderr should explain the failure, got: {}",
        stderr
    );
}
