//! Connectivity check against the session data service.
//!
//! Enables the local response cache, then requests one historical session
//! schedule live. The request always goes to the network; the cache only
//! receives the response.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::{parse_schedule, ConnectionError, SessionClient, SessionInfo};
use crate::cache::ResponseCache;
use crate::config::ConfigValues;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Check, CheckContext};

/// Probes the data service through a freshly enabled cache.
#[derive(Debug, Default)]
pub struct ConnectionCheck;

impl ConnectionCheck {
    /// Create the check.
    pub fn new() -> Self {
        Self
    }

    /// Cache directory as configured: the override variable, else the default.
    fn cache_dir(ctx: &CheckContext<'_>) -> Result<PathBuf> {
        let cache = &ctx.settings.cache;
        let env_path = ctx.project_root.join(&ctx.settings.env_file);
        let values = ConfigValues::load(&env_path, [cache.env_var.as_str()], ctx.env)?;

        Ok(values
            .get(&cache.env_var)
            .map(PathBuf::from)
            .unwrap_or_else(|| cache.default_dir.clone()))
    }

    fn probe(
        &self,
        ctx: &CheckContext<'_>,
        cache_dir: &std::path::Path,
        ui: &mut dyn UserInterface,
    ) -> std::result::Result<SessionInfo, ConnectionError> {
        let root = ctx.project_root.join(cache_dir);
        let cache = ResponseCache::enable(&root).map_err(|source| {
            ConnectionError::CacheUnavailable {
                path: root.clone(),
                source,
            }
        })?;
        ui.success(&format!("Data cache enabled at: {}", cache_dir.display()));

        let probe = &ctx.settings.probe;
        let key = probe.session_key();
        let client =
            SessionClient::with_timeout(&probe.base_url, Duration::from_secs(probe.timeout_secs))?;

        ui.message("  Testing data download (this may take a moment)...");
        ui.detail(&format!(
            "GET {} (timeout {}s)",
            client.schedule_url(&key),
            client.timeout().as_secs()
        ));

        let mut spinner = ui.start_spinner(&format!("Fetching {}...", key));
        let response = match client.fetch_schedule(&key) {
            Ok(response) => {
                spinner.finish_success(&format!("Fetched {}", key));
                response
            }
            Err(e) => {
                spinner.finish_error(&format!("Could not fetch {}", key));
                return Err(e);
            }
        };

        let info = parse_schedule(&response.body, &key, &response.url)?;

        match cache.store(&response.url, &response.body) {
            Ok(entry) => ui.detail(&format!("Cached as {}", entry.content_path.display())),
            Err(e) => {
                tracing::warn!("Failed to cache {}: {:#}", response.url, e);
                ui.warning(&format!("Response not cached: {:#}", e));
            }
        }

        Ok(info)
    }
}

impl Check for ConnectionCheck {
    fn name(&self) -> &str {
        "F1 Data Connection"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.message("Testing F1 data connection...");

        let cache_dir = Self::cache_dir(ctx)?;
        match self.probe(ctx, &cache_dir, ui) {
            Ok(info) => {
                ui.success("Successfully connected to the F1 data service");
                ui.message(&format!(
                    "  Test session: {} - {}",
                    info.event_name, info.session_name
                ));
                Ok(true)
            }
            Err(e) => {
                tracing::debug!("Connection probe failed: {:?}", e);
                ui.error(&format!("F1 data connection failed: {}", e));
                Ok(false)
            }
        }
    }
}
