//! Integration tests for the `gpaguide` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with its config directory inside `home`
fn gpaguide(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gpaguide"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("Failed to run gpaguide")
}

fn write_courses(dir: &TempDir) -> String {
    let path = dir.path().join("courses.csv");
    fs::write(
        &path,
        "name,grade,credits,type\nEnglish I,A,1,regular\nAP Biology,B,1,ap\n",
    )
    .expect("Failed to write CSV");
    path.to_string_lossy().to_string()
}

fn assert_json_stdout(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "gpaguide failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{stdout}"))
}

#[test]
fn calc_json_stays_parseable_with_console_logging() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_courses(&dir);
    // A directory cannot be opened as a log file, so logs fall back to the console.
    let log_target = dir.path().to_string_lossy().to_string();

    for level_args in [["--log-level", "info"], ["--log-level", "debug"]] {
        let mut args: Vec<&str> = level_args.to_vec();
        args.extend(["--log-file", log_target.as_str(), "calc", csv.as_str(), "--json"]);
        let output = gpaguide(dir.path(), &args);

        let json = assert_json_stdout(&output);
        let results = json.as_array().expect("results array");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["courseCount"], 2);
        assert_eq!(results[0]["policy"], "additive");
        let unweighted = results[0]["unweightedAverage"].as_f64().unwrap_or_default();
        assert!((unweighted - 3.5).abs() < 1e-9);
    }
}

#[test]
fn calc_json_with_debug_flag_and_capped_policy() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_courses(&dir);
    let log_target = dir.path().to_string_lossy().to_string();

    let output = gpaguide(
        dir.path(),
        &[
            "--debug",
            "--log-file",
            log_target.as_str(),
            "calc",
            csv.as_str(),
            "--policy",
            "capped",
            "--json",
        ],
    );

    let json = assert_json_stdout(&output);
    assert_eq!(json[0]["policy"], "capped");
    let weighted = json[0]["weightedAverage"].as_f64().unwrap_or_default();
    assert!((weighted - 5.0).abs() < 1e-9);
}

#[test]
fn calc_fails_for_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.csv");

    let missing = missing.to_string_lossy().to_string();
    let output = gpaguide(dir.path(), &["calc", missing.as_str()]);
    assert!(!output.status.success());
}
