//! The [`Config`] struct and its persistence methods.
//!
//! Covers:
//! - `load` / `load_from` (YAML file I/O, defaults when the file is missing)
//! - `save` / `save_to` (atomic write via temp file + rename)
//! - XDG-style path helpers (`config_dir`, `config_path`)
//! - Semantic validation (`validate`)

use crate::error::ConfigError;
use crate::types::LogLevel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use text_converter_core::ConversionKind;

/// Default prefix for registered command ids (`text-converter.toCamelCase`).
pub const DEFAULT_COMMAND_PREFIX: &str = "text-converter";

/// Host integration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace prepended to every command id, joined with a `.`.
    pub command_prefix: String,

    /// Conversions exposed as commands, in registration order.
    pub enabled_conversions: Vec<ConversionKind>,

    /// Debug log level (overridden by `RUST_LOG` and `--log-level`).
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            enabled_conversions: ConversionKind::ALL.to_vec(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command id prefix
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    /// Restrict the exposed conversions
    pub fn with_enabled_conversions(mut self, kinds: &[ConversionKind]) -> Self {
        self.enabled_conversions = kinds.to_vec();
        self
    }

    /// Load configuration from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        if contents.trim().is_empty() {
            log::info!("Config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        log::info!(
            "Loaded config: prefix '{}', {} conversions enabled",
            config.command_prefix,
            config.enabled_conversions.len()
        );
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.command_prefix;
        if prefix.is_empty() {
            return Err(ConfigError::Validation(
                "command_prefix must not be empty".to_string(),
            ));
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "command_prefix '{prefix}' must not contain whitespace"
            )));
        }
        if prefix.starts_with('.') || prefix.ends_with('.') {
            return Err(ConfigError::Validation(format!(
                "command_prefix '{prefix}' must not start or end with '.'"
            )));
        }

        let mut seen = HashSet::new();
        for kind in &self.enabled_conversions {
            if !seen.insert(kind) {
                return Err(ConfigError::Validation(format!(
                    "enabled_conversions lists '{}' more than once",
                    kind.id()
                )));
            }
        }
        if self.enabled_conversions.is_empty() {
            log::warn!("enabled_conversions is empty; no commands will be registered");
        }

        Ok(())
    }

    /// Get the configuration directory (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("text-converter")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("text-converter")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}
