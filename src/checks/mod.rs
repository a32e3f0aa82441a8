//! The individual setup checks.
//!
//! Each check narrates what it inspects through the [`UserInterface`] and
//! returns whether it passed. An `Err` means the check itself broke; the
//! verifier records that as a failure of this check only.
//!
//! - [`packages`] - Python packages importable
//! - [`directories`] - Project directories present (created when missing)
//! - [`environment`] - Env file present, expected variables reported
//! - [`connection`] - Session data service reachable through the local cache

pub mod connection;
pub mod directories;
pub mod environment;
pub mod packages;

pub use connection::ConnectionCheck;
pub use directories::DirectoryCheck;
pub use environment::EnvironmentCheck;
pub use packages::{PackageImportCheck, PackageProbe, PackageStatus, PythonImportProbe};

use std::env::VarError;
use std::path::Path;

use crate::config::VerifierSettings;
use crate::error::Result;
use crate::ui::UserInterface;

/// Lookup into the process environment (or a stand-in for tests).
pub type EnvLookup = dyn Fn(&str) -> std::result::Result<String, VarError>;

fn process_env(key: &str) -> std::result::Result<String, VarError> {
    std::env::var(key)
}

/// Everything a check may read.
pub struct CheckContext<'a> {
    /// Directory relative paths resolve against.
    pub project_root: &'a Path,
    /// Verifier settings.
    pub settings: &'a VerifierSettings,
    /// Process environment lookup.
    pub env: &'a EnvLookup,
}

impl<'a> CheckContext<'a> {
    /// Context reading the real process environment.
    pub fn new(project_root: &'a Path, settings: &'a VerifierSettings) -> Self {
        Self {
            project_root,
            settings,
            env: &process_env,
        }
    }

    /// Context with a custom environment lookup.
    pub fn with_env(
        project_root: &'a Path,
        settings: &'a VerifierSettings,
        env: &'a EnvLookup,
    ) -> Self {
        Self {
            project_root,
            settings,
            env,
        }
    }
}

/// One diagnostic routine.
pub trait Check {
    /// Name shown in the summary.
    fn name(&self) -> &str;

    /// Run the check. `Ok(false)` is a reported failure; `Err` is an
    /// unexpected one.
    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool>;
}
