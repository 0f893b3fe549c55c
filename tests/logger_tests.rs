//! Integration tests for logger behavior.

use gpa_guide::logger::{set_level, set_level_from_str, Level};
use gpa_guide::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    use gpa_guide::logger::{close_file_logging, init_file_logging};
    use std::fs;
    use tempfile::TempDir;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("gpaguide.log");

    assert!(init_file_logging(&path));
    error!("could not read {}", "fall.csv");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[ERROR] could not read fall.csv"));
}
