//! Ordered check execution and the final summary.

use std::path::Path;

use crate::checks::{
    Check, CheckContext, ConnectionCheck, DirectoryCheck, EnvironmentCheck, PackageImportCheck,
    PythonImportProbe,
};
use crate::config::VerifierSettings;
use crate::ui::{hints, StatusKind, UserInterface, RULE_WIDTH};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Check name.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
}

/// Results of a full run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    results: Vec<CheckResult>,
}

impl VerificationReport {
    /// Results in the order the checks ran.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of checks run.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Print the summary block followed by next steps or common fixes.
    pub fn print_summary(&self, ui: &mut dyn UserInterface, env_file: &Path) {
        let rule = "=".repeat(RULE_WIDTH);

        ui.message("");
        ui.message(&rule);
        ui.message("SUMMARY:");
        ui.message(&rule);

        for result in &self.results {
            let kind = StatusKind::for_outcome(result.passed);
            let line = format!("{}: {}", result.name, kind.label());
            if result.passed {
                ui.success(&line);
            } else {
                ui.error(&line);
            }
        }

        ui.message("");
        ui.message(&format!(
            "Total: {}/{} checks passed",
            self.passed(),
            self.total()
        ));
        ui.message("");

        if self.all_passed() {
            ui.success("All checks passed! Your environment is ready.");
            ui.message("");
            ui.message("Next steps:");
            for (idx, step) in hints::next_steps().iter().enumerate() {
                ui.hint(&format!("{}. {}", idx + 1, step));
            }
        } else {
            ui.error("Some checks failed. Please fix the issues above.");
            ui.message("");
            ui.message("Common fixes:");
            for fix in hints::common_fixes(env_file) {
                ui.hint(&format!("- {}", fix));
            }
        }
    }
}

/// Runs a fixed list of checks.
pub struct Verifier {
    checks: Vec<Box<dyn Check>>,
}

impl Verifier {
    /// Verifier over the given checks, run in the given order.
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// The four standard checks: imports, directories, environment, connection.
    pub fn standard(settings: &VerifierSettings) -> Self {
        Self::new(vec![
            Box::new(PackageImportCheck::new(Box::new(PythonImportProbe::new(
                &settings.python,
            )))),
            Box::new(DirectoryCheck::new()),
            Box::new(EnvironmentCheck::new()),
            Box::new(ConnectionCheck::new()),
        ])
    }

    /// Names of the checks, in run order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check. A check that errors is reported and counted as failed.
    pub fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> VerificationReport {
        let mut results = Vec::with_capacity(self.checks.len());

        for (idx, check) in self.checks.iter().enumerate() {
            if idx > 0 {
                ui.message("");
            }

            let name = check.name().to_string();
            tracing::debug!("Running check '{}'", name);

            let passed = match check.run(ctx, ui) {
                Ok(passed) => passed,
                Err(e) => {
                    tracing::debug!("Check '{}' errored: {:?}", name, e);
                    ui.error(&format!("{} failed with error: {}", name, e));
                    false
                }
            };

            tracing::debug!("Check '{}' passed: {}", name, passed);
            results.push(CheckResult { name, passed });
        }

        VerificationReport { results }
    }
}
