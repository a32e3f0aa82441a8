//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    OutputMode, PitwallTheme, ProgressSpinner, SpinnerHandle, StatusKind, UserInterface,
    RULE_WIDTH,
};

/// Terminal UI writing the report to stdout.
pub struct TerminalUI {
    term: Term,
    theme: PitwallTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, colored when stdout supports it.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: PitwallTheme::detect(),
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = StatusKind::Success.format(&self.theme, msg);
        self.line(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = StatusKind::Warning.format(&self.theme, msg);
        self.line(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = StatusKind::Failed.format(&self.theme, msg);
        self.line(&line);
    }

    fn hint(&mut self, msg: &str) {
        let line = self.theme.format_hint(msg);
        self.line(&line);
    }

    fn show_header(&mut self, title: &str) {
        let title = self.theme.format_header(title);
        let rule = self.theme.format_rule(RULE_WIDTH);
        self.line(&title);
        self.line(&rule);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        // Spinners draw on stderr; only animate when someone is watching.
        if self.mode.shows_spinners() && Term::stderr().is_term() {
            Box::new(ProgressSpinner::new(message, 2, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}
