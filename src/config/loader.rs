//! Settings file discovery and loading.

use crate::config::schema::VerifierSettings;
use crate::config::validator::validate;
use crate::error::{PitwallError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name looked up in the project root.
pub const SETTINGS_FILE: &str = ".pitwall.yml";

/// Path of the settings file for a project root.
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_FILE)
}

/// Load settings for a project.
///
/// An explicit path must exist. Without one, `<project_root>/.pitwall.yml`
/// is used when present and the built-in defaults otherwise.
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<VerifierSettings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    let path = settings_path(project_root);
    if path.exists() {
        load_settings_file(&path)
    } else {
        tracing::debug!("No {} in {}, using defaults", SETTINGS_FILE, project_root.display());
        Ok(VerifierSettings::default())
    }
}

/// Load and validate a single settings file.
///
/// # Errors
///
/// Returns `SettingsNotFound` if the file doesn't exist, `SettingsUnreadable`
/// if it can't be read, `SettingsParseError` if the YAML is invalid and
/// `SettingsValidationError` if a value is unusable.
pub fn load_settings_file(path: &Path) -> Result<VerifierSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PitwallError::SettingsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PitwallError::SettingsUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let settings = parse_settings(&content, path)?;
    validate(&settings)?;
    Ok(settings)
}

/// Parse YAML content into settings. Blank content yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<VerifierSettings> {
    if content.trim().is_empty() {
        return Ok(VerifierSettings::default());
    }

    serde_yaml::from_str(content).map_err(|e| PitwallError::SettingsParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_file_uses_defaults() {
        let temp = TempDir::new().unwrap();

        let settings = load_settings(temp.path(), None).unwrap();

        assert_eq!(settings, VerifierSettings::default());
    }

    #[test]
    fn project_file_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "app_name: Pit Wall\n").unwrap();

        let settings = load_settings(temp.path(), None).unwrap();

        assert_eq!(settings.app_name, "Pit Wall");
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");

        let err = load_settings(temp.path(), Some(&path)).unwrap_err();

        assert!(matches!(err, PitwallError::SettingsNotFound { .. }));
    }

    #[test]
    fn directory_in_place_of_file_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::create_dir(&path).unwrap();

        let err = load_settings(temp.path(), Some(&path)).unwrap_err();

        assert!(matches!(err, PitwallError::SettingsUnreadable { .. }));
        assert!(err.is_settings_error());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "packages: [unclosed\n").unwrap();

        let err = load_settings(temp.path(), None).unwrap_err();

        assert!(matches!(err, PitwallError::SettingsParseError { .. }));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "probe:\n  round: 0\n").unwrap();

        let err = load_settings(temp.path(), None).unwrap_err();

        assert!(matches!(err, PitwallError::SettingsValidationError { .. }));
    }

    #[test]
    fn mixed_case_session_code_loads() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "probe:\n  session: Sq\n").unwrap();

        let settings = load_settings(temp.path(), None).unwrap();

        assert_eq!(settings.probe.session, crate::api::SessionCode::SprintQualifying);
    }

    #[test]
    fn blank_file_yields_defaults() {
        let settings = parse_settings("  \n", Path::new(".pitwall.yml")).unwrap();
        assert_eq!(settings, VerifierSettings::default());
    }
}
