//! Guidance printed after the summary.

use std::path::Path;

/// Next steps shown when every check passed.
pub fn next_steps() -> &'static [&'static str] {
    &[
        "Run the first data collection script",
        "Explore the data in a Jupyter notebook",
        "Start building features",
    ]
}

/// Common fixes shown when any check failed.
pub fn common_fixes(env_file: &Path) -> Vec<String> {
    vec![
        "Run: pip install -r requirements.txt".to_string(),
        format!("Create {} file with required variables", env_file.display()),
        "Check your internet connection".to_string(),
    ]
}
