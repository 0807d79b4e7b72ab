//! End-to-end tests for the time-stats binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const README_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/README.md");
const DAY_TABLE_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day_table.md");

/// Temp dir containing `README.md` with the given contents
fn workspace_with_readme(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), contents).unwrap();
    dir
}

fn fixture(path: &str) -> String {
    fs::read_to_string(Path::new(path)).unwrap()
}

#[test]
fn test_default_run_writes_chart() {
    let dir = workspace_with_readme(&fixture(README_FIXTURE));

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 6 records"));

    let html = fs::read_to_string(dir.path().join("time_stats.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Relative time per part"));
    assert!(html.contains("Absolute time per part"));
    assert!(html.contains(">3-2</text>"));
}

#[test]
fn test_text_format_prints_summary() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.arg("-i")
        .arg(README_FIXTURE)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("% time"))
        .stdout(predicate::str::contains("1200.0000  2-1"))
        .stdout(predicate::str::contains("total (6 parts)"));
}

#[test]
fn test_json_format() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    let output = cmd
        .arg("-i")
        .arg(README_FIXTURE)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = value["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["1-1", "1-2", "2-1", "2-2", "3-1", "3-2"]);
    assert_eq!(value["records"][2]["ms"], 1200.0);
    assert_eq!(value["summary"]["slowest"], "2-1");
}

#[test]
fn test_csv_format_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("timings.csv");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.arg("-i")
        .arg(README_FIXTURE)
        .arg("--format")
        .arg("csv")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = fs::read_to_string(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "label,ms,share");
    assert_eq!(lines.len(), 7);
    assert!(lines[2].starts_with("1-2,5,"));
}

#[test]
fn test_day_column_layout() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.arg("-i")
        .arg(DAY_TABLE_FIXTURE)
        .arg("--columns")
        .arg("2,3")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("2-1,2,"))
        .stdout(predicate::str::contains("2-2,2000,"));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("time-stats.toml");
    fs::write(
        &config,
        format!(
            "input = {:?}\nformat = \"csv\"\n\n[table]\nduration_columns = [2, 3]\n",
            DAY_TABLE_FIXTURE
        ),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("label,ms,share"))
        .stdout(predicate::str::contains("1-2,5,"));
}

#[test]
fn test_missing_marker_fails() {
    let dir = workspace_with_readme("# Nothing to see\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Table region not found"));

    assert!(!dir.path().join("time_stats.html").exists());
}

#[test]
fn test_single_marker_fails() {
    let dir = workspace_with_readme(
        "<!--- benchmarking table --->\n| a | `1ms` | `2ms` | b |\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("found 1"));
}

#[test]
fn test_unknown_unit_fails_with_literal() {
    let readme = fixture(README_FIXTURE).replace("`900ns`", "`10xs`");
    let dir = workspace_with_readme(&readme);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("10xs"))
        .stderr(predicate::str::contains("Row 2"));

    assert!(!dir.path().join("time_stats.html").exists());
}

#[test]
fn test_overflowing_duration_fails() {
    let readme = fixture(README_FIXTURE).replace("`1.2s`", "`1e306s`");
    let dir = workspace_with_readme(&readme);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid numeric value"))
        .stderr(predicate::str::contains("1e306s"));

    assert!(!dir.path().join("time_stats.html").exists());
}

#[test]
fn test_empty_table_chart_fails() {
    let dir = workspace_with_readme(
        "<!--- benchmarking table --->
| Part 1 | Part 2 | Notes |
| :---: | :---: | :---: |
<!--- benchmarking table --->
",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No timing records"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read README.md"));
}

#[test]
fn test_invalid_columns_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("time-stats");
    cmd.arg("-i")
        .arg(README_FIXTURE)
        .arg("--columns")
        .arg("1,7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
