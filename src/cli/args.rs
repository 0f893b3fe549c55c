//! CLI argument definitions for `GpaGuide`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_guide::config::ConfigOverrides;
use gpa_guide::gpa::WeightingPolicy;
use gpa_guide::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI weighting policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Honors +0.5, AP/IB/Dual +1.0, no cap
    Additive,
    /// Regular +1.0 (max 5.0), Honors/AP +2.0 (max 6.0)
    Capped,
    /// Unweighted mean of courses, weighted courses +0.5
    Simple,
}

impl From<PolicyArg> for WeightingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Additive => Self::Additive,
            PolicyArg::Capped => Self::Capped,
            PolicyArg::Simple => Self::Simple,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `policy`, `precision`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate GPA for one or more course list files.
    ///
    /// Each CSV needs a `grade` column; `name`, `credits` and `type` are optional.
    Calc {
        /// Paths to course list CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Weighting policy (defaults to config `policy`)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Decimal places for averages (defaults to config `precision`)
        #[arg(long, value_name = "DIGITS")]
        precision: Option<usize>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Reject unknown grades, unknown course types, and non-positive credits
        #[arg(long)]
        strict: bool,
    },
    /// Generate a GPA report from a course list file.
    Report {
        /// Path to course list CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Weighting policy (defaults to config `policy`)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Report heading (defaults to the input file name)
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
    },
    /// Show the grade scale and the bonus table for each weighting policy.
    Scale {
        /// Show only this policy
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpaguide",
    about = "High-school GPA calculator",
    version = gpa_guide::get_version()
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config weighting policy
    #[arg(long = "config-policy", value_enum)]
    pub config_policy: Option<PolicyArg>,

    /// Override config strict flag (true/false)
    #[arg(long = "config-strict", value_parser = BoolishValueParser::new())]
    pub config_strict: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over
    /// long-form flags (e.g., `--config-reports-dir`) when both are given.
    /// Per-command `--policy`, `--precision` and `--strict` flags are folded
    /// in here as well so every handler reads one effective config.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let (command_policy, command_precision, command_strict) = match &self.command {
            Command::Calc {
                policy,
                precision,
                strict,
                ..
            } => (*policy, *precision, strict.then_some(true)),
            Command::Report { policy, .. } => (*policy, None, None),
            Command::Config { .. } | Command::Scale { .. } => (None, None, None),
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            policy: command_policy
                .or(self.config_policy)
                .map(|p| WeightingPolicy::from(p).to_string()),
            precision: command_precision,
            strict: command_strict.or(self.config_strict),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_policy: None,
            config_strict: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.policy.is_none());
        assert!(overrides.precision.is_none());
        assert!(overrides.strict.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare(Command::Scale { policy: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.config_policy = Some(PolicyArg::Capped);
        cli.reports_dir = Some(PathBuf::from("/output"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.policy, Some("capped".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare(Command::Config { subcommand: None });
        cli.config_reports_dir = Some(PathBuf::from("/long/out"));
        cli.reports_dir = Some(PathBuf::from("/short/out"));
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/short/out".to_string())
        );

        cli.reports_dir = None;
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_command_flags_win_over_global_overrides() {
        let mut cli = bare(Command::Calc {
            input_files: vec![PathBuf::from("courses.csv")],
            policy: Some(PolicyArg::Simple),
            precision: Some(2),
            json: false,
            strict: true,
        });
        cli.config_policy = Some(PolicyArg::Capped);
        cli.config_strict = Some(false);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.policy, Some("simple".to_string()));
        assert_eq!(overrides.precision, Some(2));
        assert_eq!(overrides.strict, Some(true));
    }

    #[test]
    fn test_parse_calc_command() {
        let cli = Cli::try_parse_from([
            "gpaguide",
            "calc",
            "fall.csv",
            "spring.csv",
            "--policy",
            "capped",
            "--json",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Calc {
                input_files,
                policy,
                json,
                ..
            } => {
                assert_eq!(input_files.len(), 2);
                assert_eq!(policy, Some(PolicyArg::Capped));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_version_flag_reports_crate_version() {
        let err = Cli::try_parse_from(["gpaguide", "--version"]).expect_err("version exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(gpa_guide::get_version()));
    }
}
