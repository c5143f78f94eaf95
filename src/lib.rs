// Outcome - result/error algebra for command and query handlers
// Copyright (c) 2025 Outcome Contributors
// Licensed under the MIT License

//! # Outcome
//!
//! Outcome is a small, immutable algebra for "the result of an operation that
//! may fail". Command and query handlers return outcomes for expected failures
//! (a rule violated, a record missing) and keep panics and contract errors for
//! programmer mistakes.
//!
//! ## Overview
//!
//! - [`outcome::TypedOutcome`] - generic foundation over a value and an error item type
//! - [`outcome::Outcome`] - failures carry the built-in [`domain::Error`]
//! - [`outcome::UnitOutcome`] - no success value
//! - [`outcome::OutcomeExt`] - `is_success`, `is_failure`, `errors_by_code`, `errors_by_kind`
//!
//! ## Architecture
//!
//! - [`domain`] - error kinds, error items, metadata and contract errors
//! - [`outcome`] - the three outcome types and their query extensions
//! - [`config`] - diagnostics configuration
//! - [`logging`] - subscriber setup and failure logging
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::domain::Error;
//! use outcome::outcome::{Outcome, OutcomeExt};
//!
//! fn reserve(seats: u32) -> Outcome<u32> {
//!     if seats > 4 {
//!         return Error::builder("at most 4 seats per booking")
//!             .code("TOO_MANY_SEATS")
//!             .build()
//!             .unwrap()
//!             .into();
//!     }
//!     Outcome::success(seats).with_message("reserved")
//! }
//!
//! let ok = reserve(2).map(|n| n * 100);
//! assert!(ok.is_success());
//! assert_eq!(ok.value(), Some(&200));
//! assert_eq!(ok.message(), Some("reserved"));
//!
//! let too_many = reserve(9).map(|n| n * 100);
//! assert!(too_many.is_failure());
//! assert_eq!(too_many.first_error().unwrap().code(), "TOO_MANY_SEATS");
//! ```
//!
//! ## Error Handling
//!
//! Misuse of the API (an empty error message, an empty error list, asking a
//! success for its first error) returns [`domain::OutcomeError`] through the
//! [`domain::Result`] alias instead of producing a failed outcome:
//!
//! ```rust
//! use outcome::domain::{OutcomeError, Result};
//! use outcome::outcome::Outcome;
//!
//! fn example() -> Result<()> {
//!     let empty = Outcome::<u32>::failure(Vec::new());
//!     assert!(matches!(empty, Err(OutcomeError::ArgumentInvalid { .. })));
//!
//!     let ok = Outcome::success(1u32);
//!     assert!(matches!(ok.first_error(), Err(OutcomeError::InvalidState { .. })));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Logging
//!
//! Contract violations are reported as `tracing` debug events. Hosts that
//! want to see them install a subscriber:
//!
//! ```rust,no_run
//! use outcome::config::LoggingConfig;
//! use outcome::logging::init_logging;
//!
//! let _guard = init_logging(&LoggingConfig::default()).expect("logging");
//! ```

pub mod config;
pub mod domain;
pub mod logging;
pub mod outcome;

// Used by exported macros so callers need no direct `tracing` dependency.
#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
