//! Configuration schema types
//!
//! The crate itself is pure; the only configurable concern is how its
//! diagnostics are emitted once a host installs a subscriber.

use serde::{Deserialize, Serialize};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Rotation policy for the optional log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

/// Root configuration
///
/// Maps to a TOML file with a single `[logging]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutcomeConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OutcomeConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.logging.validate()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format
    #[serde(default)]
    pub format: LogFormat,

    /// Include the event target in each line
    #[serde(default = "default_true")]
    pub with_target: bool,

    /// Also write JSON lines to a rolling file
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for the rolling file
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// Rotation policy for the rolling file
    #[serde(default)]
    pub file_rotation: FileRotation,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        if self.file_enabled && self.file_path.trim().is_empty() {
            return Err("logging.file_path cannot be empty when file_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            with_target: true,
            file_enabled: false,
            file_path: default_file_path(),
            file_rotation: FileRotation::default(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_file_path() -> String {
    "./logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = OutcomeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn test_invalid_level() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid logging.level"));
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_path_required_when_enabled() {
        let config = LoggingConfig {
            file_enabled: true,
            file_path: " ".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: OutcomeConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file_rotation, FileRotation::Daily);
    }
}
