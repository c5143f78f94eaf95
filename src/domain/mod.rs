//! Error items and contract errors.
//!
//! This module contains the leaf types of the algebra: the classifying
//! [`ErrorKind`], the built-in [`Error`] item with its [`ErrorItem`] contract,
//! immutable [`Metadata`] bags, and the [`OutcomeError`] returned when the API
//! itself is misused.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Classification** ([`ErrorKind`], with `"Default"` and `"Unexpected"` predefined)
//! - **Error items** ([`Error`], [`ErrorBuilder`], [`ErrorItem`])
//! - **Metadata** ([`Metadata`], [`MetadataBuilder`])
//! - **Contract errors** ([`OutcomeError`]) and the [`Result`] alias
//!
//! # Expected failures vs contract errors
//!
//! An [`Error`] is data: it ends up inside a failed outcome and travels through
//! `map`/`bind` untouched. An [`OutcomeError`] is returned immediately when a
//! constructor receives an empty argument or an accessor is called in the wrong
//! state:
//!
//! ```rust
//! use outcome::domain::{Error, OutcomeError, Result};
//!
//! fn example() -> Result<()> {
//!     let err = Error::builder("email already registered")
//!         .code("EMAIL_TAKEN")
//!         .build()?;
//!     assert_eq!(err.code(), "EMAIL_TAKEN");
//!
//!     let misuse = Error::create("");
//!     assert!(matches!(misuse, Err(OutcomeError::ArgumentInvalid { .. })));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod errors;
pub mod kind;
pub mod metadata;
pub mod result;

// Re-export commonly used types for convenience
pub use error::{Cause, Error, ErrorBuilder, ErrorItem};
pub use errors::OutcomeError;
pub use kind::{ErrorKind, DEFAULT_KIND, UNEXPECTED_KIND};
pub use metadata::{Metadata, MetadataBuilder};
pub use result::Result;
