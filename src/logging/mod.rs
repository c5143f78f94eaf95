//! Logging and observability
//!
//! The algebra reports contract violations as `tracing` debug events and
//! failure construction as trace events. This module lets a host install a
//! subscriber for them and log failed outcomes consistently.
//!
//! # Example
//!
//! ```no_run
//! use outcome::logging::init_logging;
//! use outcome::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log every error item of a failed outcome
///
/// Does nothing for successful or uninitialized outcomes. Events are
/// emitted through the crate's own `tracing` re-export, so callers do not
/// need `tracing` in their own dependencies.
///
/// # Example
///
/// ```
/// use outcome::domain::Error;
/// use outcome::outcome::{Outcome, UnitOutcome};
///
/// let outcome: Outcome<u32> = Error::create("quota exceeded").unwrap().into();
/// outcome::log_failure!(&outcome, "Failed to reserve seats");
/// outcome::log_failure!(&UnitOutcome::success(), "archive");
/// ```
#[macro_export]
macro_rules! log_failure {
    ($outcome:expr, $context:expr) => {
        for error in $crate::outcome::OutcomeLike::errors($outcome) {
            $crate::__private::tracing::warn!(
                code = $crate::domain::ErrorItem::code(error),
                kind = %$crate::domain::ErrorItem::kind(error),
                error = $crate::domain::ErrorItem::message(error),
                context = $context,
                "Operation failed"
            );
        }
    };
}
