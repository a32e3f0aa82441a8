//! Error types for pitwall operations.
//!
//! This module defines [`PitwallError`], the error type used by the command
//! layer and the checks, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PitwallError` for failures that need distinct handling (a broken
//!   settings file ends the run before any check starts)
//! - Use `anyhow::Error` (via `PitwallError::Other`) for unexpected errors
//!   inside a check; the verifier reports them against that check only
//! - Connectivity failures have their own enum, [`ConnectionError`](crate::api::ConnectionError)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pitwall operations.
#[derive(Debug, Error)]
pub enum PitwallError {
    /// Settings file given explicitly but not present.
    #[error("Settings not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Settings file exists but could not be read.
    #[error("Failed to read settings at {path}: {source}")]
    SettingsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// Settings parsed but contain unusable values.
    #[error("Invalid settings: {message}")]
    SettingsValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PitwallError {
    /// Whether this error comes from loading the settings file.
    pub fn is_settings_error(&self) -> bool {
        matches!(
            self,
            Self::SettingsNotFound { .. }
                | Self::SettingsUnreadable { .. }
                | Self::SettingsParseError { .. }
                | Self::SettingsValidationError { .. }
        )
    }
}

/// Result type alias for pitwall operations.
pub type Result<T> = std::result::Result<T, PitwallError>;
