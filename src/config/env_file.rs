//! .env file parsing and configuration value lookup.
//!
//! [`EnvFileParser`] reads files in the standard KEY=value format.
//! [`ConfigValues`] layers a parsed file under the process environment so
//! checks can read variables without mutating process-wide state.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Inline comments: `KEY=value # note` (a `#` needs whitespace before it)
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use pitwall::config::EnvFileParser;
///
/// let content = r#"
/// # Pipeline layout
/// DATA_DIR=./data
/// RAW_DATA_DIR="./data/raw"
/// FASTF1_CACHE=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DATA_DIR"), Some(&"./data".to_string()));
/// assert_eq!(vars.get("RAW_DATA_DIR"), Some(&"./data/raw".to_string()));
/// assert_eq!(vars.get("FASTF1_CACHE"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    ///
    /// Lines without `=` are ignored. A later assignment to the same key wins.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    /// Resolve a raw value: quoted values end at the closing quote, unquoted
    /// values end before a whitespace-led `#` comment.
    fn parse_value(value: &str) -> String {
        if let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') {
            if let Some(end) = value[1..].find(quote) {
                return value[1..end + 1].to_string();
            }
        }

        Self::strip_inline_comment(value).to_string()
    }

    fn strip_inline_comment(value: &str) -> &str {
        let mut prev_is_space = false;
        for (idx, c) in value.char_indices() {
            if c == '#' && prev_is_space {
                return value[..idx].trim_end();
            }
            prev_is_space = c.is_whitespace();
        }
        value
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read env file {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Load and parse an env file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}

/// Read-only view of configuration variables.
///
/// Built from an env file plus a lookup into the process environment. A
/// variable already present in the process environment keeps its value; the
/// file only fills gaps.
///
/// # Example
///
/// ```
/// use pitwall::config::ConfigValues;
/// use std::collections::HashMap;
///
/// let mut file = HashMap::new();
/// file.insert("DATA_DIR".to_string(), "./data".to_string());
/// file.insert("RAW_DATA_DIR".to_string(), "".to_string());
///
/// let no_env = |_: &str| -> Result<String, std::env::VarError> {
///     Err(std::env::VarError::NotPresent)
/// };
/// let values = ConfigValues::layered(file, ["DATA_DIR", "RAW_DATA_DIR"], &no_env);
/// assert_eq!(values.get("DATA_DIR"), Some("./data"));
/// assert_eq!(values.get("RAW_DATA_DIR"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    vars: HashMap<String, String>,
}

impl ConfigValues {
    /// Layer `file_vars` under the process values for `keys`.
    pub fn layered<'k, I, F>(file_vars: HashMap<String, String>, keys: I, env_fn: &F) -> Self
    where
        I: IntoIterator<Item = &'k str>,
        F: Fn(&str) -> std::result::Result<String, VarError> + ?Sized,
    {
        let mut vars = file_vars;
        for key in keys {
            if let Ok(value) = env_fn(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Self { vars }
    }

    /// Load an optional env file and layer it under the process values for `keys`.
    pub fn load<'k, I, F>(path: &Path, keys: I, env_fn: &F) -> Result<Self>
    where
        I: IntoIterator<Item = &'k str>,
        F: Fn(&str) -> std::result::Result<String, VarError> + ?Sized,
    {
        let file_vars = EnvFileParser::load_optional(path)?;
        Ok(Self::layered(file_vars, keys, env_fn))
    }

    /// Get a variable's value. Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Number of variables known, set or empty.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are known.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
