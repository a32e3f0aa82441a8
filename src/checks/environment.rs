//! Environment file check.

use crate::config::ConfigValues;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Check, CheckContext};

/// Requires the env file and reports which expected variables it sets.
///
/// Unset variables are warnings; only a missing file fails the check.
#[derive(Debug, Default)]
pub struct EnvironmentCheck;

impl EnvironmentCheck {
    /// Create the check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for EnvironmentCheck {
    fn name(&self) -> &str {
        "Environment Setup"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.message("Testing environment setup...");

        let env_file = &ctx.settings.env_file;
        let path = ctx.project_root.join(env_file);
        if !path.is_file() {
            ui.error(&format!(
                "{} file missing - create it from {}.example",
                env_file.display(),
                env_file.display()
            ));
            return Ok(false);
        }
        ui.success(&format!("{} file exists", env_file.display()));

        let expected = &ctx.settings.expected_vars;
        let values = ConfigValues::load(&path, expected.iter().map(String::as_str), ctx.env)?;
        ui.detail(&format!("{} variables loaded", values.len()));

        for var in expected {
            match values.get(var) {
                Some(value) => ui.success(&format!("{} is set to: {}", var, value)),
                None => ui.warning(&format!("{} is not set", var)),
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifierSettings;
    use crate::ui::MockUI;
    use std::env::VarError;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    fn run_in(temp: &TempDir, ui: &mut MockUI) -> bool {
        let settings = VerifierSettings::default();
        let ctx = CheckContext::with_env(temp.path(), &settings, &no_env);
        EnvironmentCheck::new().run(&ctx, ui).unwrap()
    }

    #[test]
    fn missing_env_file_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        assert!(!run_in(&temp, &mut ui));
        assert_eq!(
            ui.errors(),
            [".env file missing - create it from .env.example"]
        );
    }

    #[test]
    fn env_directory_counts_as_missing_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".env")).unwrap();
        let mut ui = MockUI::new();

        assert!(!run_in(&temp, &mut ui));
        assert_eq!(
            ui.errors(),
            [".env file missing - create it from .env.example"]
        );
    }

    #[test]
    fn inline_comment_is_not_part_of_value() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "DATA_DIR=./data # project data\n").unwrap();
        let mut ui = MockUI::new();

        assert!(run_in(&temp, &mut ui));
        assert!(ui
            .successes()
            .contains(&"DATA_DIR is set to: ./data".to_string()));
    }

    #[test]
    fn complete_env_file_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env"),
            "DATA_DIR=./data\nRAW_DATA_DIR=./data/raw\nPROCESSED_DATA_DIR=./data/processed\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        assert!(run_in(&temp, &mut ui));
        assert!(ui.warnings().is_empty());
        assert!(ui
            .successes()
            .contains(&"RAW_DATA_DIR is set to: ./data/raw".to_string()));
    }

    #[test]
    fn partial_env_file_still_passes_with_warnings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "DATA_DIR=./data\nRAW_DATA_DIR=\n").unwrap();
        let mut ui = MockUI::new();

        assert!(run_in(&temp, &mut ui));
        assert_eq!(
            ui.warnings(),
            ["RAW_DATA_DIR is not set", "PROCESSED_DATA_DIR is not set"]
        );
    }

    #[test]
    fn empty_env_file_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "").unwrap();
        let mut ui = MockUI::new();

        assert!(run_in(&temp, &mut ui));
        assert_eq!(ui.warnings().len(), 3);
    }

    #[test]
    fn process_environment_satisfies_expected_variable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "# nothing here\n").unwrap();
        let settings = VerifierSettings::default();
        let env = |key: &str| {
            if key == "DATA_DIR" {
                Ok("/srv/f1".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        };
        let ctx = CheckContext::with_env(temp.path(), &settings, &env);
        let mut ui = MockUI::new();

        assert!(EnvironmentCheck::new().run(&ctx, &mut ui).unwrap());
        assert!(ui
            .successes()
            .contains(&"DATA_DIR is set to: /srv/f1".to_string()));
    }
}
