//! Package import check.
//!
//! The pipeline is Python, so "installed" means the configured interpreter
//! can `import` the module. The interpreter is resolved by walking `PATH`
//! ourselves rather than relying on `which`, whose behavior varies across
//! systems.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::Result;
use crate::ui::UserInterface;

use super::{Check, CheckContext};

/// Outcome of probing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    /// The module imported cleanly.
    Available,
    /// The interpreter ran but the import failed.
    Missing,
    /// The interpreter itself could not be found or started.
    InterpreterMissing { interpreter: String },
}

/// Something that can tell whether a module is importable.
pub trait PackageProbe {
    /// Probe a single module.
    fn probe(&self, module: &str) -> PackageStatus;

    /// Where the probe runs from, for verbose output.
    fn describe(&self) -> String;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. On platforms with
/// an executable suffix, `tool` and `tool<suffix>` are both tried.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let mut names = vec![tool.to_string()];
    if !std::env::consts::EXE_SUFFIX.is_empty() {
        names.push(format!("{}{}", tool, std::env::consts::EXE_SUFFIX));
    }

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Probes imports by running `<python> -c "import <module>"`.
pub struct PythonImportProbe {
    interpreter: String,
    path_entries: Vec<PathBuf>,
}

impl PythonImportProbe {
    /// Probe with the interpreter found on the system PATH.
    pub fn new(interpreter: &str) -> Self {
        Self::with_path(interpreter, parse_system_path())
    }

    /// Probe with an explicit list of PATH entries.
    pub fn with_path(interpreter: &str, path_entries: Vec<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            path_entries,
        }
    }

    /// Locate the interpreter. A value containing a path separator is used as is.
    pub fn resolve_interpreter(&self) -> Option<PathBuf> {
        let given = Path::new(&self.interpreter);
        if given.components().count() > 1 {
            return (given.is_file() && is_executable(given)).then(|| given.to_path_buf());
        }
        resolve_tool_path(&self.interpreter, &self.path_entries)
    }
}

impl PackageProbe for PythonImportProbe {
    fn probe(&self, module: &str) -> PackageStatus {
        let Some(python) = self.resolve_interpreter() else {
            return PackageStatus::InterpreterMissing {
                interpreter: self.interpreter.clone(),
            };
        };

        let status = Command::new(&python)
            .arg("-c")
            .arg(format!("import {}", module))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => PackageStatus::Available,
            Ok(status) => {
                tracing::debug!("import {} exited with {}", module, status);
                PackageStatus::Missing
            }
            Err(e) => {
                tracing::debug!("Failed to start {}: {}", python.display(), e);
                PackageStatus::InterpreterMissing {
                    interpreter: self.interpreter.clone(),
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self.resolve_interpreter() {
            Some(path) => format!("Using interpreter {}", path.display()),
            None => format!("Interpreter '{}' not found on PATH", self.interpreter),
        }
    }
}

/// Verifies every configured package can be imported.
pub struct PackageImportCheck {
    probe: Box<dyn PackageProbe>,
}

impl PackageImportCheck {
    /// Create the check around a probe.
    pub fn new(probe: Box<dyn PackageProbe>) -> Self {
        Self { probe }
    }
}

impl Check for PackageImportCheck {
    fn name(&self) -> &str {
        "Package Imports"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.message("Testing package imports...");
        ui.detail(&self.probe.describe());

        let mut failed = Vec::new();
        for package in &ctx.settings.packages {
            match self.probe.probe(package.module()) {
                PackageStatus::Available => {
                    ui.success(&format!("{} imported successfully", package.name));
                }
                PackageStatus::Missing => {
                    ui.error(&format!("{} import failed", package.name));
                    failed.push(package.name.as_str());
                }
                PackageStatus::InterpreterMissing { interpreter } => {
                    ui.error(&format!(
                        "{} import failed ({} not available)",
                        package.name, interpreter
                    ));
                    failed.push(package.name.as_str());
                }
            }
        }

        if !failed.is_empty() {
            tracing::debug!("Missing packages: {}", failed.join(", "));
        }
        Ok(failed.is_empty())
    }
}
