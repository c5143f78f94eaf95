//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{LogFormat, OutcomeConfig};
use crate::domain::errors::OutcomeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OutcomeConfig
/// 4. Applies environment variable overrides (OUTCOME_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `OutcomeError::Configuration` if the file cannot be read, a
/// referenced variable is unset, parsing fails or validation fails
///
/// # Examples
///
/// ```no_run
/// use outcome::config::load_config;
///
/// let config = load_config("outcome.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OutcomeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OutcomeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OutcomeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Same as [`load_config`] for configuration text already in memory
///
/// # Errors
///
/// Returns `OutcomeError::Configuration` on substitution, parse or
/// validation failures
pub fn load_config_from_str(contents: &str) -> Result<OutcomeConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: OutcomeConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        OutcomeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(level = %config.logging.level, "Configuration loaded");
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = match PLACEHOLDER.get() {
        Some(re) => re,
        None => {
            let compiled = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
                OutcomeError::Configuration(format!("Invalid placeholder pattern: {}", e))
            })?;
            PLACEHOLDER.get_or_init(|| compiled)
        }
    };

    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(OutcomeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the OUTCOME_* prefix
///
/// Environment variables follow the pattern: OUTCOME_<SECTION>_<KEY>,
/// for example OUTCOME_LOGGING_LEVEL
fn apply_env_overrides(config: &mut OutcomeConfig) -> Result<()> {
    if let Ok(val) = std::env::var("OUTCOME_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("OUTCOME_LOGGING_FORMAT") {
        config.logging.format = match val.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(OutcomeError::Configuration(format!(
                    "Invalid OUTCOME_LOGGING_FORMAT '{}'. Must be one of: pretty, json",
                    other
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("OUTCOME_LOGGING_WITH_TARGET") {
        config.logging.with_target = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("OUTCOME_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("OUTCOME_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }

    Ok(())
}
