//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both per kind and as an ordered transcript.
//!
//! # Example
//!
//! ```
//! use pitwall::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Testing package imports...");
//! ui.error("tqdm import failed");
//!
//! assert!(ui.errors().contains(&"tqdm import failed".to_string()));
//! assert_eq!(ui.transcript().last().unwrap(), "✗ tqdm import failed");
//! ```

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface, RULE_WIDTH};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the messages of every spinner started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Every line in output order, rendered as the plain terminal would.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript line contains `needle`.
    pub fn has_line_containing(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(StatusKind::Success.format_plain(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(StatusKind::Warning.format_plain(msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(StatusKind::Failed.format_plain(msg));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
        self.transcript.push("=".repeat(RULE_WIDTH));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Spinner that does nothing.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, _msg: &str) {}
}
