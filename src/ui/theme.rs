//! Visual theme and styling.

use console::Style;

/// Pitwall's visual theme.
#[derive(Debug, Clone)]
pub struct PitwallTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for rules and secondary text.
    pub dim: Style,
    /// Style for the report header (magenta bold).
    pub header: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for PitwallTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PitwallTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a header title.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Format a remediation or next-step line.
    pub fn format_hint(&self, text: &str) -> String {
        self.hint.apply_to(text).to_string()
    }

    /// Format a horizontal rule of `width` `=` characters.
    pub fn format_rule(&self, width: usize) -> String {
        self.dim.apply_to("=".repeat(width)).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
