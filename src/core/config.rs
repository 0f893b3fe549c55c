//! Configuration module for `GpaGuide`

use crate::core::gpa::WeightingPolicy;
use crate::core::roster::DEFAULT_GRADUATION_CREDITS;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$GPA_GUIDE";

/// Decimal places used when no precision is configured
pub const DEFAULT_PRECISION: usize = 3;

/// Largest accepted display precision
pub const MAX_PRECISION: usize = 6;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// GPA calculation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Weighting policy name (additive, capped, simple)
    #[serde(default)]
    pub policy: String,
    /// Decimal places shown for averages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// Credits required to graduate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_credits: Option<f64>,
    /// Reject unknown grades, unknown course types, and non-positive credits
    #[serde(default)]
    pub strict: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override weighting policy
    pub policy: Option<String>,
    /// Override display precision
    pub precision: Option<usize>,
    /// Override strict input validation
    pub strict: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPA_GUIDE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpaguide`
    /// - macOS: `~/Library/Application Support/gpaguide`
    /// - Windows: `%APPDATA%\gpaguide`
    #[must_use]
    pub fn get_gpaguide_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpaguide")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer releases are filled in
    /// while existing user settings stay as they are.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.grading.policy.is_empty() && !defaults.grading.policy.is_empty() {
            self.grading.policy.clone_from(&defaults.grading.policy);
            changed = true;
        }
        if self.grading.precision.is_none() && defaults.grading.precision.is_some() {
            self.grading.precision = defaults.grading.precision;
            changed = true;
        }
        if self.grading.graduation_credits.is_none()
            && defaults.grading.graduation_credits.is_some()
        {
            self.grading.graduation_credits = defaults.grading.graduation_credits;
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file on disk
    /// is not touched.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     policy: Some("capped".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(policy) = &overrides.policy {
            self.grading.policy.clone_from(policy);
        }
        if let Some(precision) = overrides.precision {
            self.grading.precision = Some(precision);
        }
        if let Some(strict) = overrides.strict {
            self.grading.strict = strict;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_gpaguide_dir`].
    ///
    /// [`get_gpaguide_dir`]: Self::get_gpaguide_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpaguide_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_GUIDE` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpaguide_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults and `$GPA_GUIDE` is expanded
    /// in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this indicates a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults, and save it back when anything was added
    /// - On first run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Weighting policy in effect
    ///
    /// An empty or unrecognized policy name falls back to the default policy.
    #[must_use]
    pub fn policy(&self) -> WeightingPolicy {
        if self.grading.policy.is_empty() {
            return WeightingPolicy::default();
        }
        self.grading.policy.parse().unwrap_or_else(|e| {
            warn!("{e}; using {}", WeightingPolicy::default());
            WeightingPolicy::default()
        })
    }

    /// Display precision in effect, capped at [`MAX_PRECISION`]
    #[must_use]
    pub fn precision(&self) -> usize {
        self.grading
            .precision
            .unwrap_or(DEFAULT_PRECISION)
            .min(MAX_PRECISION)
    }

    /// Graduation credit requirement in effect
    #[must_use]
    pub fn graduation_credits(&self) -> f64 {
        self.grading
            .graduation_credits
            .filter(|credits| credits.is_finite() && *credits > 0.0)
            .unwrap_or(DEFAULT_GRADUATION_CREDITS)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `policy`, `precision`,
    /// `graduation_credits`, `strict`, `reports_dir`. Dashed spellings are
    /// accepted for multi-word keys.
    ///
    /// # Returns
    /// `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "policy" => Some(self.grading.policy.clone()),
            "precision" => Some(self.precision().to_string()),
            "graduation_credits" | "graduation-credits" => {
                Some(self.graduation_credits().to_string())
            }
            "strict" => Some(self.grading.strict.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated before being stored. Call [`save()`](Config::save)
    /// to persist the change.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not
    /// parse for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "policy" => {
                let policy: WeightingPolicy = value.parse()?;
                self.grading.policy = policy.to_string();
            }
            "precision" => {
                let precision = value
                    .parse::<usize>()
                    .ok()
                    .filter(|p| *p <= MAX_PRECISION)
                    .ok_or_else(|| {
                        format!("Invalid precision '{value}': expected 0 to {MAX_PRECISION}")
                    })?;
                self.grading.precision = Some(precision);
            }
            "graduation_credits" | "graduation-credits" => {
                let credits = value
                    .parse::<f64>()
                    .ok()
                    .filter(|c| c.is_finite() && *c > 0.0)
                    .ok_or_else(|| format!("Invalid credit requirement '{value}'"))?;
                self.grading.graduation_credits = Some(credits);
            }
            "strict" => {
                self.grading.strict = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'strict': '{value}'"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Call [`save()`](Config::save) to persist the change.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "policy" => self.grading.policy.clone_from(&defaults.grading.policy),
            "precision" => self.grading.precision = defaults.grading.precision,
            "graduation_credits" | "graduation-credits" => {
                self.grading.graduation_credits = defaults.grading.graduation_credits;
            }
            "strict" => self.grading.strict = defaults.grading.strict,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  policy = \"{}\"", self.grading.policy)?;
        writeln!(f, "  precision = {}", self.precision())?;
        writeln!(f, "  graduation_credits = {}", self.graduation_credits())?;
        writeln!(f, "  strict = {}", self.grading.strict)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
