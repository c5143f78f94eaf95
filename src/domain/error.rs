//! Error items
//!
//! An [`Error`] describes one expected failure: a human readable message, a
//! machine code, a classifying [`ErrorKind`], an optional wrapped cause and an
//! immutable [`Metadata`] bag. Error items have no setters; outcomes rely on
//! this to share one error collection across every `map`/`bind` stage.

use super::errors::OutcomeError;
use super::kind::ErrorKind;
use super::metadata::Metadata;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque wrapped cause of an error item
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Read-only contract every error item type exposes
///
/// The generic outcome is parameterised over any `ErrorItem`, and the query
/// extensions filter on `code` and `kind` through it. Implementations must be
/// immutable once constructed.
pub trait ErrorItem {
    /// Human readable description
    fn message(&self) -> &str;

    /// Machine readable code
    fn code(&self) -> &str;

    /// Classification
    fn kind(&self) -> &ErrorKind;

    /// Attached metadata
    fn metadata(&self) -> &Metadata;
}

/// Built-in error item
///
/// # Examples
///
/// ```
/// use outcome::domain::{Error, ErrorKind};
///
/// let err = Error::builder("order not found")
///     .code("ORDER_NOT_FOUND")
///     .kind(ErrorKind::new("NotFound").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(err.code(), "ORDER_NOT_FOUND");
/// assert_eq!(err.kind().as_str(), "NotFound");
///
/// // Code falls back to the kind's token
/// let err = Error::create("bad input").unwrap();
/// assert_eq!(err.code(), "Default");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ErrorRepr")]
pub struct Error {
    message: String,
    code: String,
    kind: ErrorKind,
    #[serde(skip_serializing)]
    cause: Option<Cause>,
    metadata: Metadata,
}

impl Error {
    /// Creates an error with the default kind and code
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if `message` is empty
    pub fn create(message: impl Into<String>) -> Result<Self> {
        Self::builder(message).build()
    }

    /// Creates an error with the `"Unexpected"` kind
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if `message` is empty
    pub fn unexpected(message: impl Into<String>) -> Result<Self> {
        Self::unexpected_builder(message).build()
    }

    /// Starts building an error with the given message
    pub fn builder(message: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::new(message)
    }

    /// Starts building an error whose kind is fixed to `"Unexpected"`
    pub fn unexpected_builder(message: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::new(message).kind(ErrorKind::unexpected())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The wrapped cause, if any
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl ErrorItem for Error {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

// Causes compare by identity; they are opaque.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.message == other.message
            && self.code == other.code
            && self.kind == other.kind
            && self.metadata == other.metadata
            && same_cause
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Builder for [`Error`]
///
/// Every field except the message is optional: a blank code falls back to
/// the kind's token and a missing kind falls back to `"Default"`.
#[derive(Debug)]
pub struct ErrorBuilder {
    message: String,
    code: Option<String>,
    kind: Option<ErrorKind>,
    cause: Option<Cause>,
    metadata: Option<Metadata>,
}

impl ErrorBuilder {
    /// Creates a new ErrorBuilder
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            kind: None,
            cause: None,
            metadata: None,
        }
    }

    /// Sets the machine code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the kind
    pub fn kind(mut self, kind: ErrorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Wraps an underlying error as the cause
    pub fn cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Reuses an already shared cause
    pub fn shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Sets the metadata bag
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Builds the Error
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the message is empty
    pub fn build(self) -> Result<Error> {
        if self.message.is_empty() {
            return Err(OutcomeError::argument_invalid(
                "message",
                "error message cannot be empty",
            ));
        }

        let kind = self.kind.unwrap_or_default();
        let code = match self.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => kind.as_str().to_string(),
        };

        Ok(Error {
            message: self.message,
            code,
            kind,
            cause: self.cause,
            metadata: self.metadata.unwrap_or_default(),
        })
    }
}

/// Serialized shape of an error item, validated on the way in
#[derive(Deserialize)]
struct ErrorRepr {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    kind: Option<ErrorKind>,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<ErrorRepr> for Error {
    type Error = OutcomeError;

    fn try_from(repr: ErrorRepr) -> Result<Self> {
        let mut builder = ErrorBuilder::new(repr.message).metadata(repr.metadata);
        if let Some(code) = repr.code {
            builder = builder.code(code);
        }
        if let Some(kind) = repr.kind {
            builder = builder.kind(kind);
        }
        builder.build()
    }
}
