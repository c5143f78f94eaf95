//! Configuration management.
//!
//! The algebra needs no configuration to run; this module configures the
//! diagnostics it emits through `tracing` when a host application (or a test
//! harness) installs a subscriber via [`crate::logging::init_logging`].
//!
//! # Example Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//! with_target = true
//! file_enabled = true
//! file_path = "${OUTCOME_LOG_DIR}"
//! file_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and
//! `OUTCOME_LOGGING_<KEY>` variables override parsed values:
//!
//! ```bash
//! export OUTCOME_LOGGING_LEVEL="trace"
//! export OUTCOME_LOGGING_FORMAT="json"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use outcome::config::load_config;
//!
//! # fn example() {
//! match load_config("outcome.toml") {
//!     Ok(config) => println!("Log level: {}", config.logging.level),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{FileRotation, LogFormat, LoggingConfig, OutcomeConfig};
