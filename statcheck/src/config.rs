//! Configuration loading for statcheck.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use statcheck_core::Alternative;
use std::path::Path;

/// Top-level configuration for statcheck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings for hypothesis tests.
    pub test: TestConfig,
    /// Settings for terminal output.
    pub output: OutputConfig,
}

/// Default settings applied to every test unless overridden on the command
/// line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Significance level α (e.g. 0.05).
    pub alpha: f64,
    /// Alternative-hypothesis form: two-sided, less, or greater.
    pub alternative: Alternative,
}

/// Settings for terminal output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to color the conclusion line.
    pub colors: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            alternative: Alternative::TwoSided,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".statcheck.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default file (`.statcheck.toml`) or use
    /// defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try the default
    /// location.
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }
}
