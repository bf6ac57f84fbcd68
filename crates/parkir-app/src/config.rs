//! Configuration management for parkir
//!
//! Config stored at: ~/.config/parkir/config.json

use chrono::format::{Item, StrftimeItems};
use parkir_domain::MAX_CAPACITY;
use parkir_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of parking spots in the facility
    #[serde(default = "default_capacity")]
    pub capacity: i64,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Currency label printed before fees
    #[serde(default = "default_currency")]
    pub currency: String,

    /// chrono format string for arrival/departure times
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Clear the terminal between menu interactions
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_capacity() -> i64 {
    20
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            output_format: default_output_format(),
            currency: default_currency(),
            timestamp_format: default_timestamp_format(),
            clear_screen: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("parkir");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity <= 0 || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::InvalidValue(format!(
                "capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, self.capacity
            ))
            .into());
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue("timestamp_format must not be empty".to_string()).into());
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            ))
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parkir Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Capacity:         {}", self.capacity)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Currency:         {}", self.currency)?;
        writeln!(f, "Timestamp format: {}", self.timestamp_format)?;
        writeln!(f, "Clear screen:     {}", self.clear_screen)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
