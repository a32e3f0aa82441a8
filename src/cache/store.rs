//! Cache storage implementation.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::CacheEntry;

/// Disk cache for probe responses.
#[derive(Debug)]
pub struct ResponseCache {
    root: PathBuf,
}

impl ResponseCache {
    /// Enable the cache at `root`, creating the directory and its parents.
    pub fn enable(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!("Response cache enabled at {}", root.display());
        Ok(Self { root })
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the body for `url` is stored.
    pub fn content_path(&self, url: &str) -> PathBuf {
        let hash = Sha256::digest(url.as_bytes());
        let hash_str = hex::encode(&hash[..16]);
        self.root.join(format!("{}.json", hash_str))
    }

    fn metadata_path(&self, url: &str) -> PathBuf {
        self.content_path(url).with_extension("meta.json")
    }

    /// Store a response body and its metadata.
    pub fn store(&self, url: &str, body: &str) -> Result<CacheEntry> {
        let content_path = self.content_path(url);
        fs::write(&content_path, body)
            .with_context(|| format!("Failed to write cache entry {}", content_path.display()))?;

        let entry = CacheEntry::new(url, content_path.clone(), body.len() as u64);
        let json = serde_json::to_string_pretty(&entry)?;
        fs::write(self.metadata_path(url), json)?;

        Ok(entry)
    }

    /// Load the metadata for `url`, if it was cached.
    pub fn load(&self, url: &str) -> Result<Option<CacheEntry>> {
        let meta_path = self.metadata_path(url);
        if !meta_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&meta_path)?;
        let entry = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt cache metadata {}", meta_path.display()))?;
        Ok(Some(entry))
    }
}
