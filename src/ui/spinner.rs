//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::icons::StatusKind;
use super::theme::PitwallTheme;
use super::SpinnerHandle;

/// A progress spinner for blocking operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: PitwallTheme,
    indent: usize,
}

impl ProgressSpinner {
    /// Create a new spinner with a message, indented by `indent` spaces.
    pub fn new(message: &str, indent: usize, theme: PitwallTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        let prefix = " ".repeat(indent);
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template(&format!("{}{{spinner:.magenta}} {{msg}}", prefix))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme, indent }
    }

    /// Create a spinner that doesn't show (for quiet mode and non-TTY output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: PitwallTheme::plain(),
            indent: 0,
        }
    }

    fn finish(&mut self, kind: StatusKind, msg: &str) {
        if self.bar.is_hidden() {
            return;
        }
        let prefix = " ".repeat(self.indent);
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar
            .finish_with_message(format!("{}{}", prefix, kind.format(&self.theme, msg)));
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(StatusKind::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(StatusKind::Failed, msg);
    }
}
