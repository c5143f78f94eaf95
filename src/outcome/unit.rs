//! Value-less outcome
//!
//! [`UnitOutcome`] reports success or failure of an operation that produces
//! nothing. It wraps `TypedOutcome<Unit, Error>` where `Unit` is a private
//! zero-size marker, and forwards every operation to the foundation.

use super::status::OutcomeStatus;
use super::typed::TypedOutcome;
use super::wrapper::Outcome;
use crate::domain::result::Result;
use crate::domain::{Error, Metadata};

/// Zero-size success payload; never leaves the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit;

/// Outcome of an operation with no success value
///
/// # Examples
///
/// ```
/// use outcome::domain::Error;
/// use outcome::outcome::{Outcome, UnitOutcome};
///
/// fn archive(order_id: u32) -> UnitOutcome {
///     if order_id == 0 {
///         return Error::create("order id is required").unwrap().into();
///     }
///     UnitOutcome::success()
/// }
///
/// let receipt: Outcome<String> = archive(7).map(|| "archived".to_string());
/// assert_eq!(receipt.value().map(String::as_str), Some("archived"));
/// assert!(archive(0).first_error().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOutcome(TypedOutcome<Unit, Error>);

impl UnitOutcome {
    /// Creates a successful outcome
    pub fn success() -> Self {
        Self(TypedOutcome::success(Unit))
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

    pub(crate) fn from_typed(inner: TypedOutcome<Unit, Error>) -> Self {
        Self(inner)
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
        S: FnOnce() -> R,
        F: FnOnce(&[Error]) -> R,
    {
        self.0.match_with(|_| on_success(), on_failure)
    }

    /// Produces a value after a success
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce() -> U,
    {
        Outcome::from(self.0.map(|_| transform()))
    }

    /// Chains a value-producing operation after a success
    pub fn bind<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce() -> Outcome<U>,
    {
        Outcome::from(self.0.bind(|_| transform().into_typed()))
    }

    /// Chains another value-less operation after a success
    pub fn and_then<F>(self, transform: F) -> UnitOutcome
    where
        F: FnOnce() -> UnitOutcome,
    {
        Self(self.0.bind(|_| transform().0))
    }

    /// See [`TypedOutcome::as_failure`]
    pub fn as_failure<U>(self) -> Result<Outcome<U>> {
        self.0.as_failure::<U>().map(Outcome::from)
    }

    /// Borrowing view as `(is_success, errors)`
    pub fn deconstruct(&self) -> (bool, Option<&[Error]>) {
        let (is_success, _, errors) = self.0.deconstruct();
        (is_success, errors)
    }

    /// See [`TypedOutcome::into_result`]
    pub fn into_result(self) -> Result<std::result::Result<(), std::sync::Arc<[Error]>>> {
        self.0.into_result().map(|inner| inner.map(|_| ()))
    }

    /// Converts into the generic foundation with `()` as the value type
    pub fn into_typed(self) -> TypedOutcome<(), Error> {
        self.0.map(|_| ())
    }
}

impl Default for UnitOutcome {
    fn default() -> Self {
        Self(TypedOutcome::default())
    }
}

impl From<Error> for UnitOutcome {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl From<TypedOutcome<(), Error>> for UnitOutcome {
    fn from(inner: TypedOutcome<(), Error>) -> Self {
        Self(inner.map(|_| Unit))
    }
}
