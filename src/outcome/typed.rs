//! Generic outcome foundation
//!
//! [`TypedOutcome<T, E>`] is the single place where outcome invariants are
//! enforced. It is parameterised by the success value `T` and the error item
//! type `E`; the convenience wrappers in [`super::wrapper`] and
//! [`super::unit`] forward everything here.
//!
//! Errors are stored as an `Arc<[E]>`. The public failure constructors always
//! build a fresh array; `map`, `bind` and `as_failure` forward the very same
//! array to the next outcome instead of copying it. That is only sound while
//! error items stay immutable, which [`ErrorItem`] and
//! [`crate::domain::Error`] guarantee by exposing readers only.

use super::status::OutcomeStatus;
use crate::domain::errors::OutcomeError;
use crate::domain::result::Result;
use crate::domain::{ErrorItem, Metadata};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
enum State<T, E> {
    Uninitialized,
    Success(T),
    Failure(Arc<[E]>),
}

/// Immutable outcome of an operation that may fail
///
/// # Examples
///
/// ```
/// use outcome::domain::Error;
/// use outcome::outcome::TypedOutcome;
///
/// let ok: TypedOutcome<i32, Error> = TypedOutcome::success(21).with_message("ok");
/// let doubled = ok.map(|v| v * 2);
/// assert_eq!(doubled.value(), Some(&42));
/// assert_eq!(doubled.message(), Some("ok"));
///
/// let failed: TypedOutcome<i32, Error> = Error::create("bad").unwrap().into();
/// let mapped = failed.map(|v| v * 2);
/// assert_eq!(mapped.first_error().unwrap().message(), "bad");
/// ```
#[derive(Debug, PartialEq)]
pub struct TypedOutcome<T, E> {
    state: State<T, E>,
    message: Option<String>,
    metadata: Metadata,
}

impl<T, E> TypedOutcome<T, E> {
    /// Creates a successful outcome
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
            message: None,
            metadata: Metadata::empty(),
        }
    }

    /// Creates a failed outcome from any sequence of errors
    ///
    /// The sequence is consumed in a single pass and frozen.
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the sequence is empty
    pub fn failure<I>(errors: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let errors: Arc<[E]> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(empty_errors());
        }
        tracing::trace!(error_count = errors.len(), "Created failure outcome");
        Ok(Self::from_owned_errors(errors, None, Metadata::empty()))
    }

    /// Creates a failed outcome by copying a slice of errors
    ///
    /// The slice is cloned straight into one exactly sized allocation.
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if the slice is empty
    pub fn failure_from_slice(errors: &[E]) -> Result<Self>
    where
        E: Clone,
    {
        if errors.is_empty() {
            return Err(empty_errors());
        }
        tracing::trace!(error_count = errors.len(), "Created failure outcome");
        Ok(Self::from_owned_errors(
            Arc::from(errors),
            None,
            Metadata::empty(),
        ))
    }

    /// Creates a failed outcome carrying exactly one error
    pub fn failure_single(error: E) -> Self {
        let errors: Arc<[E]> = Arc::new([error]);
        Self::from_owned_errors(errors, None, Metadata::empty())
    }

    /// Early-return form of [`failure_single`](Self::failure_single)
    ///
    /// Equivalent to `error.into()`.
    pub fn from_error(error: E) -> Self {
        Self::failure_single(error)
    }

    /// Builds a failure around an array this crate already owns exclusively.
    ///
    /// No copy is made. Callers must hand over a non-empty array that is not
    /// reachable from outside the crate.
    pub(crate) fn from_owned_errors(
        errors: Arc<[E]>,
        message: Option<String>,
        metadata: Metadata,
    ) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            state: State::Failure(errors),
            message,
            metadata,
        }
    }

    /// Returns a copy of this outcome with the given message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns a copy of this outcome with the given metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn status(&self) -> OutcomeStatus {
        match self.state {
            State::Uninitialized => OutcomeStatus::Uninitialized,
            State::Success(_) => OutcomeStatus::Success,
            State::Failure(_) => OutcomeStatus::Failure,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The success value, or `None` in any other state
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The errors of a failure, or `None` in any other state
    pub fn failure_errors(&self) -> Option<&[E]> {
        match &self.state {
            State::Failure(errors) => Some(&errors[..]),
            _ => None,
        }
    }

    /// The errors of a failure, or an empty slice in any other state
    pub fn errors(&self) -> &[E] {
        self.failure_errors().unwrap_or(&[])
    }

    /// The first error of a failure
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::InvalidState` on a success or an uninitialized
    /// outcome; the message says which
    pub fn first_error(&self) -> Result<&E> {
        match &self.state {
            State::Failure(errors) => errors.first().ok_or_else(empty_errors),
            State::Success(_) => Err(OutcomeError::invalid_state(
                "first_error",
                "outcome is a success and carries no errors",
            )),
            State::Uninitialized => Err(OutcomeError::invalid_state(
                "first_error",
                "outcome is uninitialized; create it with success or failure",
            )),
        }
    }

    /// Dispatches over the two terminal states
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::InvalidState` on an uninitialized outcome;
    /// neither closure is called
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> Result<R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&[E]) -> R,
    {
        match self.state {
            State::Success(value) => Ok(on_success(value)),
            State::Failure(errors) => Ok(on_failure(&errors[..])),
            State::Uninitialized => Err(OutcomeError::invalid_state(
                "match_with",
                "outcome is uninitialized and has no branch to take",
            )),
        }
    }

    /// Transforms the success value
    ///
    /// A failure is forwarded with the same error array, message and
    /// metadata; `transform` is not called.
    pub fn map<U, F>(self, transform: F) -> TypedOutcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let state = match self.state {
            State::Success(value) => State::Success(transform(value)),
            State::Failure(errors) => State::Failure(errors),
            State::Uninitialized => State::Uninitialized,
        };
        TypedOutcome {
            state,
            message: self.message,
            metadata: self.metadata,
        }
    }

    /// Chains an operation that may itself fail
    ///
    /// On success the outcome returned by `transform` is returned as is. On
    /// failure `transform` is never called and the failure is forwarded with
    /// the same error array, message and metadata.
    pub fn bind<U, F>(self, transform: F) -> TypedOutcome<U, E>
    where
        F: FnOnce(T) -> TypedOutcome<U, E>,
    {
        match self.state {
            State::Success(value) => transform(value),
            State::Failure(errors) => {
                TypedOutcome::from_owned_errors(errors, self.message, self.metadata)
            }
            State::Uninitialized => TypedOutcome {
                state: State::Uninitialized,
                message: self.message,
                metadata: self.metadata,
            },
        }
    }

    /// Re-types a failure for a different value type
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::InvalidState` unless the outcome is a failure
    pub fn as_failure<U>(self) -> Result<TypedOutcome<U, E>> {
        match self.state {
            State::Failure(errors) => Ok(TypedOutcome::from_owned_errors(
                errors,
                self.message,
                self.metadata,
            )),
            State::Success(_) => Err(OutcomeError::invalid_state(
                "as_failure",
                "outcome is a success",
            )),
            State::Uninitialized => Err(OutcomeError::invalid_state(
                "as_failure",
                "outcome is uninitialized",
            )),
        }
    }

    /// Borrowing view as `(is_success, value, errors)`
    ///
    /// Never fails: an uninitialized outcome yields `(false, None, None)`.
    pub fn deconstruct(&self) -> (bool, Option<&T>, Option<&[E]>) {
        match &self.state {
            State::Success(value) => (true, Some(value), None),
            State::Failure(errors) => (false, None, Some(&errors[..])),
            State::Uninitialized => (false, None, None),
        }
    }

    /// Owning form of [`deconstruct`](Self::deconstruct)
    pub fn into_parts(self) -> (bool, Option<T>, Option<Arc<[E]>>) {
        match self.state {
            State::Success(value) => (true, Some(value), None),
            State::Failure(errors) => (false, None, Some(errors)),
            State::Uninitialized => (false, None, None),
        }
    }

    /// Converts into a standard `Result` for use with `?`
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::InvalidState` on an uninitialized outcome
    pub fn into_result(self) -> Result<std::result::Result<T, Arc<[E]>>> {
        match self.state {
            State::Success(value) => Ok(Ok(value)),
            State::Failure(errors) => Ok(Err(errors)),
            State::Uninitialized => Err(OutcomeError::invalid_state(
                "into_result",
                "outcome is uninitialized",
            )),
        }
    }
}

impl<T, E: ErrorItem> TypedOutcome<T, E> {
    /// Views the errors through the general error item contract
    pub fn error_items(&self) -> impl Iterator<Item = &dyn ErrorItem> {
        self.errors().iter().map(|e| e as &dyn ErrorItem)
    }
}

impl<T, E> Default for TypedOutcome<T, E> {
    fn default() -> Self {
        Self {
            state: State::Uninitialized,
            message: None,
            metadata: Metadata::empty(),
        }
    }
}

impl<T: Clone, E> Clone for TypedOutcome<T, E> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Uninitialized => State::Uninitialized,
            State::Success(value) => State::Success(value.clone()),
            State::Failure(errors) => State::Failure(Arc::clone(errors)),
        };
        Self {
            state,
            message: self.message.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl<T, E: ErrorItem> From<E> for TypedOutcome<T, E> {
    fn from(error: E) -> Self {
        Self::failure_single(error)
    }
}

impl<T, E> From<std::result::Result<T, E>> for TypedOutcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure_single(error),
        }
    }
}

fn empty_errors() -> OutcomeError {
    OutcomeError::argument_invalid("errors", "a failure requires at least one error")
}
