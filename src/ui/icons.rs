//! Status vocabulary shared by every output line.

use super::theme::PitwallTheme;

/// Canonical status kinds used across pitwall output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check or step succeeded.
    Success,
    /// Check or step failed.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Status for a check outcome.
    pub fn for_outcome(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Summary label for a check outcome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "PASSED",
            Self::Failed => "FAILED",
            Self::Warning => "WARNING",
        }
    }

    /// Plain status line: icon + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }

    /// Status line styled with the theme; the whole line takes the color.
    pub fn format(self, theme: &PitwallTheme, msg: &str) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Failed => &theme.error,
            Self::Warning => &theme.warning,
        };
        style.apply_to(self.format_plain(msg)).to_string()
    }
}
