//! Verification command implementation.
//!
//! Loads settings, runs the four checks and prints the summary. Check
//! failures are reported but never change the exit code; only unusable
//! settings do.

use std::path::{Path, PathBuf};

use crate::checks::CheckContext;
use crate::config::{load_settings, VerifierSettings};
use crate::error::Result;
use crate::runner::{VerificationReport, Verifier};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for a settings file that cannot be used.
const SETTINGS_EXIT_CODE: i32 = 2;

/// The verification command.
pub struct VerifyCommand {
    project_root: PathBuf,
    settings_file: Option<PathBuf>,
    api_url: Option<String>,
}

impl VerifyCommand {
    /// Create a verification command for a project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            settings_file: None,
            api_url: None,
        }
    }

    /// Use an explicit settings file instead of `.pitwall.yml`.
    pub fn with_settings_file(mut self, path: Option<PathBuf>) -> Self {
        self.settings_file = path;
        self
    }

    /// Override the data service base URL.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.api_url = url;
        self
    }

    fn settings(&self) -> Result<VerifierSettings> {
        let mut settings = load_settings(&self.project_root, self.settings_file.as_deref())?;
        if let Some(url) = &self.api_url {
            tracing::debug!("Using data service at {}", url);
            settings.probe.base_url = url.clone();
        }
        Ok(settings)
    }

    /// Run the standard checks and print the summary.
    pub fn verify(
        &self,
        settings: &VerifierSettings,
        ui: &mut dyn UserInterface,
    ) -> VerificationReport {
        ui.show_header(&format!("{} - Setup Test", settings.app_name));

        let ctx = CheckContext::new(&self.project_root, settings);
        let report = Verifier::standard(settings).run(&ctx, ui);
        report.print_summary(ui, &settings.env_file);

        tracing::debug!("{}/{} checks passed", report.passed(), report.total());
        report
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match self.settings() {
            Ok(settings) => settings,
            Err(e) if e.is_settings_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(SETTINGS_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };

        self.verify(&settings, ui);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings_path;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn invalid_settings_exit_with_two() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "probe: [not, a, map]\n").unwrap();
        let mut ui = MockUI::new();

        let result = VerifyCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.headers().is_empty());
        assert!(ui.has_line_containing("Failed to parse settings"));
    }

    #[test]
    fn unreadable_settings_exit_with_two() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(settings_path(temp.path())).unwrap();
        let mut ui = MockUI::new();

        let result = VerifyCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_line_containing("Failed to read settings"));
    }

    #[test]
    fn api_url_overrides_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            settings_path(temp.path()),
            "probe:\n  base_url: http://from-file.invalid\n",
        )
        .unwrap();

        let cmd = VerifyCommand::new(temp.path())
            .with_api_url(Some("http://127.0.0.1:9/f1".to_string()));
        let settings = cmd.settings().unwrap();

        assert_eq!(settings.probe.base_url, "http://127.0.0.1:9/f1");
    }

    #[test]
    fn failing_checks_still_succeed() {
        let temp = TempDir::new().unwrap();
        fs::write(
            settings_path(temp.path()),
            "app_name: Test Rig\npackages: []\nprobe:\n  base_url: http://127.0.0.1:1\n  timeout_secs: 2\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = VerifyCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.headers(), &["Test Rig - Setup Test".to_string()]);
        assert!(ui.has_line_containing("Total: 2/4 checks passed"));
        assert!(temp.path().join("data/processed").is_dir());
    }
}
