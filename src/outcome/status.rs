//! Outcome state discriminator

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three states an outcome can be in
///
/// `Uninitialized` is only reachable through `Default`; `Success` and
/// `Failure` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// Default-constructed, neither success nor failure
    #[default]
    Uninitialized,
    /// Carries a value
    Success,
    /// Carries at least one error
    Failure,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Uninitialized => "uninitialized",
            OutcomeStatus::Success => "success",
            OutcomeStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uninitialized() {
        assert_eq!(OutcomeStatus::default(), OutcomeStatus::Uninitialized);
    }

    #[test]
    fn test_display_and_serde_agree() {
        for status in [
            OutcomeStatus::Uninitialized,
            OutcomeStatus::Success,
            OutcomeStatus::Failure,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
