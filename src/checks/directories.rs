//! Directory structure check. Missing directories are created, so this
//! check only fails when creation itself errors.

use std::fs;

use crate::error::Result;
use crate::ui::UserInterface;

use super::{Check, CheckContext};

/// Ensures every configured directory exists under the project root.
#[derive(Debug, Default)]
pub struct DirectoryCheck;

impl DirectoryCheck {
    /// Create the check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for DirectoryCheck {
    fn name(&self) -> &str {
        "Directory Structure"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.message("Testing directory structure...");

        for dir in &ctx.settings.directories {
            let path = ctx.project_root.join(dir);
            if path.exists() {
                ui.success(&format!("{}/ exists", dir.display()));
            } else {
                ui.error(&format!("{}/ missing - creating it", dir.display()));
                fs::create_dir_all(&path)?;
                tracing::debug!("Created {}", path.display());
            }
        }

        Ok(true)
    }
}
