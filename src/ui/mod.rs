//! Console output for the verifier.
//!
//! This module provides:
//! - [`UserInterface`] trait so checks can be driven against a mock
//! - [`TerminalUI`] for real terminal usage (colored when stdout is a TTY)
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use pitwall::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("F1 Prediction System - Setup Test");
//! ui.success(".env file exists");
//! assert_eq!(ui.transcript()[1], "✓ .env file exists");
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PitwallTheme};

/// Width of the `=` rules framing the report.
pub const RULE_WIDTH: usize = 50;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Display a remediation or next-step line.
    fn hint(&mut self, msg: &str) {
        self.message(msg);
    }

    /// Show a title followed by a rule.
    fn show_header(&mut self, title: &str);

    /// Show a detail line that only verbose mode prints.
    fn detail(&mut self, msg: &str) {
        if self.output_mode().shows_details() {
            self.message(&format!("  {}", msg));
        }
    }

    /// Start a spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop the spinner and leave a success line.
    fn finish_success(&mut self, msg: &str);

    /// Stop the spinner and leave an error line.
    fn finish_error(&mut self, msg: &str);
}
