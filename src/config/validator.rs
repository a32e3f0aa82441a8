//! Settings validation rules.
//!
//! - Package names must be non-empty; import names must be dotted Python
//!   identifiers (`dotenv`, `google.cloud.storage`)
//! - Directories must be non-empty relative paths
//! - Expected variable names must be non-empty
//! - The probe needs a base URL, a round of at least 1 and a non-zero timeout

use crate::config::schema::VerifierSettings;
use crate::error::{PitwallError, Result};

/// Collect every problem with `settings`.
pub fn validate_settings(settings: &VerifierSettings) -> Vec<String> {
    let mut errors = Vec::new();

    for (idx, package) in settings.packages.iter().enumerate() {
        if package.name.trim().is_empty() || package.module().trim().is_empty() {
            errors.push(format!("packages[{}] needs a name", idx));
        } else if !is_module_path(package.module()) {
            errors.push(format!(
                "packages[{}]: '{}' is not a valid Python module name",
                idx,
                package.module()
            ));
        }
    }

    for dir in &settings.directories {
        if dir.as_os_str().is_empty() {
            errors.push("directories must not contain empty paths".to_string());
        } else if dir.is_absolute() {
            errors.push(format!(
                "directory '{}' must be relative to the project root",
                dir.display()
            ));
        }
    }

    if settings.expected_vars.iter().any(|v| v.trim().is_empty()) {
        errors.push("expected_vars must not contain empty names".to_string());
    }

    if settings.env_file.as_os_str().is_empty() {
        errors.push("env_file must not be empty".to_string());
    }

    if settings.probe.base_url.trim().is_empty() {
        errors.push("probe.base_url must not be empty".to_string());
    }
    if settings.probe.round == 0 {
        errors.push("probe.round must be at least 1".to_string());
    }
    if settings.probe.timeout_secs == 0 {
        errors.push("probe.timeout_secs must be greater than 0".to_string());
    }

    errors
}

/// Whether `module` is a dotted path of Python identifiers.
fn is_module_path(module: &str) -> bool {
    module.split('.').all(|part| {
        let mut chars = part.chars();
        chars
            .next()
            .is_some_and(|c| c == '_' || c.is_alphabetic())
            && chars.all(|c| c == '_' || c.is_alphanumeric())
    })
}

/// Validate `settings`, joining all problems into one error.
pub fn validate(settings: &VerifierSettings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PitwallError::SettingsValidationError {
            message: errors.join("; "),
        })
    }
}
