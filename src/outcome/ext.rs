//! Query extensions shared by every outcome type
//!
//! [`OutcomeLike`] is the minimal read-only surface (state and errors);
//! [`OutcomeExt`] is blanket-implemented on top of it, so the boolean
//! shortcuts and error filters can never disagree with the state they are
//! derived from.

use super::status::OutcomeStatus;
use super::typed::TypedOutcome;
use super::unit::UnitOutcome;
use super::wrapper::Outcome;
use crate::domain::errors::OutcomeError;
use crate::domain::result::Result;
use crate::domain::{Error, ErrorItem, ErrorKind};

/// Read-only view of an outcome's state and errors
pub trait OutcomeLike {
    /// Error item type carried on failure
    type Item: ErrorItem;

    fn status(&self) -> OutcomeStatus;

    /// Errors of a failure, empty otherwise
    fn errors(&self) -> &[Self::Item];
}

/// Derived queries available on every [`OutcomeLike`]
///
/// # Examples
///
/// ```
/// use outcome::domain::{Error, ErrorKind};
/// use outcome::outcome::{Outcome, OutcomeExt};
///
/// let conflict = ErrorKind::new("Conflict").unwrap();
/// let outcome: Outcome<()> = Outcome::failure(vec![
///     Error::builder("name taken").code("NAME_TAKEN").kind(conflict.clone()).build().unwrap(),
///     Error::builder("email taken").code("EMAIL_TAKEN").kind(conflict.clone()).build().unwrap(),
///     Error::builder("too short").code("NAME_LENGTH").build().unwrap(),
/// ])
/// .unwrap();
///
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.errors_by_code("NAME_TAKEN").unwrap().len(), 1);
/// assert_eq!(outcome.errors_by_kind(&conflict).len(), 2);
/// ```
pub trait OutcomeExt: OutcomeLike {
    fn is_success(&self) -> bool {
        self.status() == OutcomeStatus::Success
    }

    fn is_failure(&self) -> bool {
        self.status() == OutcomeStatus::Failure
    }

    fn is_uninitialized(&self) -> bool {
        self.status() == OutcomeStatus::Uninitialized
    }

    /// Snapshot of the errors whose code equals `code` exactly
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::ArgumentInvalid` if `code` is blank
    fn errors_by_code(&self, code: &str) -> Result<Vec<Self::Item>>
    where
        Self::Item: Clone,
    {
        if code.trim().is_empty() {
            return Err(OutcomeError::argument_invalid(
                "code",
                "error code to filter by cannot be empty",
            ));
        }
        Ok(self
            .errors()
            .iter()
            .filter(|e| e.code() == code)
            .cloned()
            .collect())
    }

    /// Snapshot of the errors whose kind equals `kind`
    fn errors_by_kind(&self, kind: &ErrorKind) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.errors()
            .iter()
            .filter(|e| e.kind() == kind)
            .cloned()
            .collect()
    }
}

impl<O: OutcomeLike + ?Sized> OutcomeExt for O {}

impl<T, E: ErrorItem> OutcomeLike for TypedOutcome<T, E> {
    type Item = E;

    fn status(&self) -> OutcomeStatus {
        TypedOutcome::status(self)
    }

    fn errors(&self) -> &[E] {
        TypedOutcome::errors(self)
    }
}

impl<T> OutcomeLike for Outcome<T> {
    type Item = Error;

    fn status(&self) -> OutcomeStatus {
        Outcome::status(self)
    }

    fn errors(&self) -> &[Error] {
        Outcome::errors(self)
    }
}

impl OutcomeLike for UnitOutcome {
    type Item = Error;

    fn status(&self) -> OutcomeStatus {
        UnitOutcome::status(self)
    }

    fn errors(&self) -> &[Error] {
        UnitOutcome::errors(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn mixed_failure() -> Outcome<i32> {
        let validation = ErrorKind::new("Validation").unwrap();
        Outcome::failure(vec![
            Error::builder("missing name").code("REQUIRED").kind(validation.clone()).build().unwrap(),
            Error::builder("missing email").code("REQUIRED").kind(validation).build().unwrap(),
            Error::unexpected("database offline").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_exactly_one_flag_on_terminal_states() {
        let ok = Outcome::success(1);
        assert!(ok.is_success() && !ok.is_failure() && !ok.is_uninitialized());

        let failed = mixed_failure();
        assert!(failed.is_failure() && !failed.is_success());

        let uninit = Outcome::<i32>::default();
        assert!(!uninit.is_success() && !uninit.is_failure());
        assert!(uninit.is_uninitialized());
    }

    #[test_case("REQUIRED", 2 ; "shared code")]
    #[test_case("Unexpected", 1 ; "code defaulted from kind")]
    #[test_case("required", 0 ; "match is case sensitive")]
    #[test_case("MISSING", 0 ; "no match")]
    fn test_errors_by_code(code: &str, expected: usize) {
        let matches = mixed_failure().errors_by_code(code).unwrap();
        assert_eq!(matches.len(), expected);
        assert!(matches.iter().all(|e| e.code() == code));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_errors_by_code_rejects_blank(code: &str) {
        let err = mixed_failure().errors_by_code(code).unwrap_err();
        assert!(err.is_argument_invalid());
    }

    #[test]
    fn test_errors_by_kind() {
        let failed = mixed_failure();
        assert_eq!(
            failed.errors_by_kind(&ErrorKind::new("Validation").unwrap()).len(),
            2
        );
        assert_eq!(failed.errors_by_kind(&ErrorKind::unexpected()).len(), 1);
        assert!(failed.errors_by_kind(&ErrorKind::default()).is_empty());
    }

    #[test]
    fn test_filters_on_success_are_empty() {
        let ok = UnitOutcome::success();
        assert!(ok.errors_by_code("REQUIRED").unwrap().is_empty());
        assert!(ok.errors_by_kind(&ErrorKind::default()).is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let failed = mixed_failure();
        let mut snapshot = failed.errors_by_code("REQUIRED").unwrap();
        snapshot.clear();
        assert_eq!(failed.errors().len(), 3);
    }

    #[test]
    fn test_works_through_generic_bound() {
        fn count_failures<O: OutcomeExt>(outcomes: &[O]) -> usize {
            outcomes.iter().filter(|o| o.is_failure()).count()
        }

        let typed: Vec<TypedOutcome<i32, Error>> = vec![
            TypedOutcome::success(1),
            Error::create("x").unwrap().into(),
            TypedOutcome::default(),
        ];
        assert_eq!(count_failures(&typed), 1);
    }
}
