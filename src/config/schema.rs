//! Settings schema for the verifier.
//!
//! Every field has a default, so an absent or partial `.pitwall.yml`
//! reproduces the standard pipeline layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::{SessionCode, SessionKey, DEFAULT_BASE_URL};

/// Root settings structure for `.pitwall.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierSettings {
    /// Project name shown in the report header.
    pub app_name: String,

    /// Python interpreter used to probe package imports.
    pub python: String,

    /// Packages that must be importable.
    pub packages: Vec<PackageSpec>,

    /// Directories (relative to the project root) that must exist.
    pub directories: Vec<PathBuf>,

    /// Env file path, relative to the project root.
    pub env_file: PathBuf,

    /// Variables the env file is expected to define.
    pub expected_vars: Vec<String>,

    /// Response cache location.
    pub cache: CacheSettings,

    /// Connectivity probe target.
    pub probe: ProbeSettings,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            app_name: "F1 Prediction System".to_string(),
            python: "python3".to_string(),
            packages: ["pandas", "numpy", "requests", "fastf1", "dotenv", "tqdm"]
                .into_iter()
                .map(PackageSpec::named)
                .collect(),
            directories: [
                "data",
                "data/raw",
                "data/processed",
                "notebooks",
                "src",
                "config",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            env_file: PathBuf::from(".env"),
            expected_vars: vec![
                "DATA_DIR".to_string(),
                "RAW_DATA_DIR".to_string(),
                "PROCESSED_DATA_DIR".to_string(),
            ],
            cache: CacheSettings::default(),
            probe: ProbeSettings::default(),
        }
    }
}

/// A package to import, with an optional module name when it differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Display name.
    pub name: String,

    /// Module passed to `import`; defaults to `name`.
    #[serde(rename = "import", default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
}

impl PackageSpec {
    /// A package whose module name equals its display name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            import_name: None,
        }
    }

    /// The module to import.
    pub fn module(&self) -> &str {
        self.import_name.as_deref().unwrap_or(&self.name)
    }
}

/// Where the probe's response cache lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Variable that overrides the cache directory.
    pub env_var: String,

    /// Directory used when the variable is unset.
    pub default_dir: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            env_var: "FASTF1_CACHE".to_string(),
            default_dir: PathBuf::from("./data/raw/fastf1_cache"),
        }
    }
}

/// Which historical session the connectivity probe requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Ergast-compatible API base URL.
    pub base_url: String,

    /// Season.
    pub year: u16,

    /// Round number within the season.
    pub round: u8,

    /// Session code (FP1, FP2, FP3, Q, SQ, S, R).
    pub session: SessionCode,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            year: 2023,
            round: 1,
            session: SessionCode::Practice1,
            timeout_secs: 30,
        }
    }
}

impl ProbeSettings {
    /// The session this probe targets.
    pub fn session_key(&self) -> SessionKey {
        SessionKey::new(self.year, self.round, self.session)
    }
}
