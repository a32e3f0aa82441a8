//! Settings and configuration values.
//!
//! - Settings schema in [`schema`]
//! - Settings file discovery and loading in [`loader`]
//! - Settings validation in [`validator`]
//! - `.env` parsing and variable lookup in [`env_file`]
//!
//! # Example
//!
//! ```
//! use pitwall::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pitwall.yml"), "python: python3.11").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.python, "python3.11");
//! assert_eq!(settings.env_file, std::path::PathBuf::from(".env"));
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::{ConfigValues, EnvFileParser};
pub use loader::{load_settings, load_settings_file, parse_settings, settings_path, SETTINGS_FILE};
pub use schema::{CacheSettings, PackageSpec, ProbeSettings, VerifierSettings};
pub use validator::{validate, validate_settings};
