//! Contract-check result alias
//!
//! Returned by every constructor and accessor that can be misused. It is
//! unrelated to the outcome types, which carry expected failures as data.

use super::errors::OutcomeError;

/// Result of a contract-checked operation
///
/// # Examples
///
/// ```
/// use outcome::domain::{Error, Result};
///
/// fn not_found(id: u32) -> Result<Error> {
///     Error::builder(format!("order {id} not found"))
///         .code("ORDER_NOT_FOUND")
///         .build()
/// }
///
/// assert_eq!(not_found(7).unwrap().code(), "ORDER_NOT_FOUND");
/// ```
pub type Result<T> = std::result::Result<T, OutcomeError>;
