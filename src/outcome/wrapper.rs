//! Outcome with the built-in error item
//!
//! [`Outcome<T>`] is a thin newtype over `TypedOutcome<T, Error>`. Every
//! operation forwards to the foundation and re-wraps the result; nothing here
//! checks an invariant of its own.

use super::status::OutcomeStatus;
use super::typed::TypedOutcome;
use super::unit::{Unit, UnitOutcome};
use crate::domain::result::Result;
use crate::domain::{Error, Metadata};
use std::sync::Arc;

/// Outcome whose failures carry [`Error`] items
///
/// # Examples
///
/// ```
/// use outcome::domain::Error;
/// use outcome::outcome::Outcome;
///
/// fn parse_quantity(raw: &str) -> Outcome<u32> {
///     match raw.parse() {
///         Ok(value) => Outcome::success(value),
///         Err(_) => Error::builder("quantity must be a number")
///             .code("QUANTITY_NAN")
///             .build()
///             .unwrap()
///             .into(),
///     }
/// }
///
/// assert_eq!(parse_quantity("3").value(), Some(&3));
/// assert_eq!(parse_quantity("x").first_error().unwrap().code(), "QUANTITY_NAN");
/// ```
#[derive(Debug, PartialEq)]
pub struct Outcome<T>(TypedOutcome<T, Error>);

impl<T> Outcome<T> {
    /// Creates a successful outcome
    pub fn success(value: T) -> Self {
        Self(TypedOutcome::success(value))
    }

    /// Creates a failed outcome from any sequence of errors
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the sequence is empty
    pub fn failure<I>(errors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        TypedOutcome::failure(errors).map(Self)
    }

    /// Creates a failed outcome by copying a slice of errors
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the slice is empty
    pub fn failure_from_slice(errors: &[Error]) -> Result<Self> {
        TypedOutcome::failure_from_slice(errors).map(Self)
    }

    /// Creates a failed outcome carrying exactly one error
    pub fn failure_single(error: Error) -> Self {
        Self(TypedOutcome::failure_single(error))
    }

    /// Early-return form of [`failure_single`](Self::failure_single)
    pub fn from_error(error: Error) -> Self {
        Self(TypedOutcome::from_error(error))
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self(self.0.with_message(message))
    }

    pub fn with_metadata(self, metadata: Metadata) -> Self {
        Self(self.0.with_metadata(metadata))
    }

    pub fn status(&self) -> OutcomeStatus {
        self.0.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.0.message()
    }

    pub fn metadata(&self) -> &Metadata {
        self.0.metadata()
    }

    /// The success value, or `None` in any other state
    pub fn value(&self) -> Option<&T> {
        self.0.value()
    }

    /// The errors of a failure, or `None` in any other state
    pub fn failure_errors(&self) -> Option<&[Error]> {
        self.0.failure_errors()
    }

    /// The errors of a failure, or an empty slice in any other state
    pub fn errors(&self) -> &[Error] {
        self.0.errors()
    }

    /// See [`TypedOutcome::first_error`]
    pub fn first_error(&self) -> Result<&Error> {
        self.0.first_error()
    }

    /// See [`TypedOutcome::match_with`]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> Result<R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&[Error]) -> R,
    {
        self.0.match_with(on_success, on_failure)
    }

    /// See [`TypedOutcome::map`]
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome(self.0.map(transform))
    }

    /// See [`TypedOutcome::bind`]
    pub fn bind<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        Outcome(self.0.bind(|value| transform(value).0))
    }

    /// See [`TypedOutcome::as_failure`]
    pub fn as_failure<U>(self) -> Result<Outcome<U>> {
        self.0.as_failure().map(Outcome)
    }

    /// Drops the success value, keeping errors, message and metadata
    pub fn discard_value(self) -> UnitOutcome {
        UnitOutcome::from_typed(self.0.map(|_| Unit))
    }

    /// See [`TypedOutcome::deconstruct`]
    pub fn deconstruct(&self) -> (bool, Option<&T>, Option<&[Error]>) {
        self.0.deconstruct()
    }

    /// See [`TypedOutcome::into_parts`]
    pub fn into_parts(self) -> (bool, Option<T>, Option<Arc<[Error]>>) {
        self.0.into_parts()
    }

    /// See [`TypedOutcome::into_result`]
    pub fn into_result(self) -> Result<std::result::Result<T, Arc<[Error]>>> {
        self.0.into_result()
    }

    /// Unwraps the underlying generic outcome
    pub fn into_typed(self) -> TypedOutcome<T, Error> {
        self.0
    }

    /// Borrows the underlying generic outcome
    pub fn as_typed(&self) -> &TypedOutcome<T, Error> {
        &self.0
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self(TypedOutcome::default())
    }
}

impl<T: Clone> Clone for Outcome<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<TypedOutcome<T, Error>> for Outcome<T> {
    fn from(inner: TypedOutcome<T, Error>) -> Self {
        Self(inner)
    }
}

impl<T> From<std::result::Result<T, Error>> for Outcome<T> {
    fn from(result: std::result::Result<T, Error>) -> Self {
        Self(TypedOutcome::from(result))
    }
}
