//! Pitwall - environment verifier for an F1 data-collection pipeline.
//!
//! Pitwall runs four independent checks against a project checkout and
//! prints a pass/fail summary: Python packages importable, project
//! directories present, environment file configured, and the session data
//! service reachable through a local response cache.
//!
//! # Modules
//!
//! - [`api`] - Session data service client and schedule parsing
//! - [`cache`] - Local response cache
//! - [`checks`] - The individual checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file and environment file loading
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Check orchestration and the summary
//! - [`ui`] - Terminal output, spinners and the test mock
//!
//! # Example
//!
//! ```
//! use pitwall::config::{ConfigValues, EnvFileParser};
//!
//! let file = EnvFileParser::parse("DATA_DIR=./data\nRAW_DATA_DIR=\n");
//! let no_env = |_: &str| -> Result<String, std::env::VarError> {
//!     Err(std::env::VarError::NotPresent)
//! };
//! let values = ConfigValues::layered(file, ["DATA_DIR"], &no_env);
//! assert_eq!(values.get("DATA_DIR"), Some("./data"));
//! assert_eq!(values.get("RAW_DATA_DIR"), None);
//! ```

pub mod api;
pub mod cache;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

pub use error::{PitwallError, Result};
