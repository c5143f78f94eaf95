//! Error classification tokens
//!
//! [`ErrorKind`] is a newtype over a non-empty string token. Kinds compare,
//! hash and display purely through their token, so caller-defined kinds
//! behave exactly like the two predefined ones.

use super::errors::OutcomeError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Token of the kind assigned when none is supplied
pub const DEFAULT_KIND: &str = "Default";

/// Token of the kind used by [`crate::domain::Error::unexpected`]
pub const UNEXPECTED_KIND: &str = "Unexpected";

static DEFAULT: OnceLock<ErrorKind> = OnceLock::new();
static UNEXPECTED: OnceLock<ErrorKind> = OnceLock::new();

/// Categorical tag attached to every error item
///
/// # Examples
///
/// ```
/// use outcome::domain::ErrorKind;
///
/// let kind = ErrorKind::new("NotFound").unwrap();
/// assert_eq!(kind.as_str(), "NotFound");
/// assert_eq!(kind, "NotFound".parse().unwrap());
/// assert_eq!(ErrorKind::default().as_str(), "Default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorKind(Arc<str>);

impl ErrorKind {
    /// Creates a new ErrorKind from a token
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the token is empty or
    /// whitespace only
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref();
        if token.trim().is_empty() {
            return Err(OutcomeError::argument_invalid(
                "token",
                "error kind token cannot be empty",
            ));
        }
        Ok(Self(Arc::from(token)))
    }

    /// The shared `"Default"` kind
    pub fn default_kind() -> Self {
        DEFAULT
            .get_or_init(|| Self(Arc::from(DEFAULT_KIND)))
            .clone()
    }

    /// The shared `"Unexpected"` kind
    pub fn unexpected() -> Self {
        UNEXPECTED
            .get_or_init(|| Self(Arc::from(UNEXPECTED_KIND)))
            .clone()
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::default_kind()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ErrorKind {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ErrorKind {
    type Error = OutcomeError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        kind.0.to_string()
    }
}

impl AsRef<str> for ErrorKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
