//! Integration tests for configuration management

use gpa_guide::config::{Config, ConfigOverrides};
use gpa_guide::gpa::WeightingPolicy;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert!(!config.paths.reports_dir.is_empty());
    assert_eq!(config.grading.policy, "additive");
    assert_eq!(config.policy(), WeightingPolicy::Additive);
    assert_eq!(config.precision(), 3);
    assert!((config.graduation_credits() - 22.0).abs() < f64::EPSILON);
    assert!(!config.grading.strict);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
policy = "capped"
precision = 2
graduation_credits = 26.0
strict = true

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.policy(), WeightingPolicy::Capped);
    assert_eq!(config.precision(), 2);
    assert!((config.graduation_credits() - 26.0).abs() < f64::EPSILON);
    assert!(config.grading.strict);
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert!(config.grading.policy.is_empty());
    assert!(config.grading.precision.is_none());
    assert_eq!(config.policy(), WeightingPolicy::Additive);
    assert!(config.paths.reports_dir.is_empty());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GPA_GUIDE/test.log"

[paths]
reports_dir = "$GPA_GUIDE/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gpaguide"));
    assert!(!config.logging.file.contains("$GPA_GUIDE"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$GPA_GUIDE"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));

    config.set("policy", "simple-mean").expect("Failed to set policy");
    assert_eq!(config.get("policy").as_deref(), Some("simple"));

    config
        .set("reports-dir", "/tmp/gpa")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports_dir").as_deref(), Some("/tmp/gpa"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values_without_changing() {
    let mut config = Config::from_defaults();

    assert!(config.set("policy", "curved").is_err());
    assert_eq!(config.policy(), WeightingPolicy::Additive);

    assert!(config.set("precision", "many").is_err());
    assert_eq!(config.precision(), 3);

    assert!(config.set("graduation_credits", "-4").is_err());
    assert!((config.graduation_credits() - 22.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("policy", "capped").expect("Failed to set policy");
    config.set("precision", "1").expect("Failed to set precision");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("policy", &defaults)
        .expect("Failed to unset policy");
    config
        .unset("precision", &defaults)
        .expect("Failed to unset precision");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.policy(), WeightingPolicy::Additive);
    assert_eq!(config.precision(), 3);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("policy", "capped").expect("Failed to set policy");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.policy(), WeightingPolicy::Capped);
    assert_eq!(loaded.precision(), config.precision());
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        policy: Some("simple".to_string()),
        precision: Some(1),
        strict: Some(true),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.policy(), WeightingPolicy::Simple);
    assert_eq!(config.precision(), 1);
    assert!(config.grading.strict);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let reports_dir = config.paths.reports_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, reports_dir);
    assert_eq!(config.policy(), WeightingPolicy::Additive);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("policy = \"additive\""));
    assert!(display_str.contains("graduation_credits = 22"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.grading.policy, defaults.grading.policy);
    assert_eq!(config.grading.precision, defaults.grading.precision);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[grading]
policy = "capped"
precision = 4
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.policy(), WeightingPolicy::Capped);
    assert_eq!(config.precision(), 4);
}

#[test]
fn test_get_gpaguide_dir() {
    let dir = Config::get_gpaguide_dir();

    assert!(dir.to_string_lossy().contains("gpaguide"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
