//! Outcome types.
//!
//! An outcome is an immutable, three-state value: `Uninitialized` (only from
//! `Default`), `Success` with a value, or `Failure` with at least one error
//! item. Handlers return outcomes for expected failures; contract misuse is
//! reported separately through [`crate::domain::OutcomeError`].
//!
//! - [`TypedOutcome<T, E>`] - generic foundation, owns every invariant
//! - [`Outcome<T>`] - failures carry the built-in [`crate::domain::Error`]
//! - [`UnitOutcome`] - no success value
//! - [`OutcomeExt`] - boolean shortcuts and error filters for all three
//!
//! # Pipelines
//!
//! `map` transforms a success value; `bind` chains a step that may fail and
//! short-circuits on the first failure. Failed outcomes are forwarded with
//! the same error array, so the original error items survive every stage.
//!
//! ```rust
//! use outcome::domain::Error;
//! use outcome::outcome::{Outcome, OutcomeExt};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     if id == 0 {
//!         return Error::builder("user not found").code("USER_NOT_FOUND").build().unwrap().into();
//!     }
//!     Outcome::success(format!("user-{id}"))
//! }
//!
//! fn greet(name: String) -> Outcome<String> {
//!     Outcome::success(format!("hello {name}"))
//! }
//!
//! let greeting = find_user(7).bind(greet);
//! assert_eq!(greeting.value().map(String::as_str), Some("hello user-7"));
//!
//! let missing = find_user(0).bind(greet).map(|s| s.len());
//! assert!(missing.is_failure());
//! assert_eq!(missing.first_error().unwrap().code(), "USER_NOT_FOUND");
//! ```

pub mod ext;
pub mod status;
pub mod typed;
pub mod unit;
pub mod wrapper;

pub use ext::{OutcomeExt, OutcomeLike};
pub use status::OutcomeStatus;
pub use typed::TypedOutcome;
pub use unit::UnitOutcome;
pub use wrapper::Outcome;
