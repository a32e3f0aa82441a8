//! Cache entry metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata stored next to a cached response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// URL the response was fetched from.
    pub url: String,
    /// Path to the cached body.
    pub content_path: PathBuf,
    /// When the response was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Body size in bytes.
    pub size_bytes: u64,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(url: impl Into<String>, content_path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            url: url.into(),
            content_path: content_path.into(),
            fetched_at: Utc::now(),
            size_bytes,
        }
    }
}
