//! Contract error types
//!
//! Contract errors describe misuse of the algebra itself (blank arguments,
//! empty failure collections, reading the first error of a success). They are
//! returned as `Err(OutcomeError)` and are never encoded as a failed outcome.
//! Expected domain failures live in [`crate::outcome`] instead.

use thiserror::Error;

/// Main contract error type
///
/// Returned by every fallible constructor and by the accessors that require
/// a particular outcome state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// An argument was empty, blank or otherwise unusable
    #[error("Invalid argument `{argument}`: {reason}")]
    ArgumentInvalid {
        argument: &'static str,
        reason: String,
    },

    /// An operation was called on an outcome in the wrong state
    #[error("Invalid state for `{operation}`: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: String,
    },

    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl OutcomeError {
    /// Creates an `ArgumentInvalid` error for the named argument
    pub fn argument_invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(argument, reason = %reason, "Rejected invalid argument");
        OutcomeError::ArgumentInvalid { argument, reason }
    }

    /// Creates an `InvalidState` error for the named operation
    pub fn invalid_state(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(operation, reason = %reason, "Rejected operation in invalid state");
        OutcomeError::InvalidState { operation, reason }
    }

    /// Returns true for argument errors
    pub fn is_argument_invalid(&self) -> bool {
        matches!(self, OutcomeError::ArgumentInvalid { .. })
    }

    /// Returns true for state errors
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, OutcomeError::InvalidState { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for OutcomeError {
    fn from(err: std::io::Error) -> Self {
        OutcomeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OutcomeError {
    fn from(err: serde_json::Error) -> Self {
        OutcomeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OutcomeError {
    fn from(err: toml::de::Error) -> Self {
        OutcomeError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_invalid_display() {
        let err = OutcomeError::argument_invalid("message", "cannot be empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument `message`: cannot be empty"
        );
        assert!(err.is_argument_invalid());
        assert!(!err.is_invalid_state());
    }

    #[test]
    fn test_invalid_state_display() {
        let err = OutcomeError::invalid_state("first_error", "outcome is a success");
        assert_eq!(
            err.to_string(),
            "Invalid state for `first_error`: outcome is a success"
        );
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: OutcomeError = io_err.into();
        assert!(matches!(err, OutcomeError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: OutcomeError = json_err.into();
        assert!(matches!(err, OutcomeError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: OutcomeError = toml_err.into();
        assert!(matches!(err, OutcomeError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_outcome_error_implements_std_error() {
        let err = OutcomeError::argument_invalid("code", "blank");
        let _: &dyn std::error::Error = &err;
    }
}
