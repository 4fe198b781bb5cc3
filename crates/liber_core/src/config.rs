//! Configuration for the service desk.
//!
//! Loads settings from /etc/liber/config.toml or uses defaults. The LLM
//! section is opt-in: with `enabled = false` (the default) the desk runs
//! purely on the deterministic composer, with no environment dependency.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/liber/config.toml";

/// Optional external generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Whether to attempt external generation at all
    #[serde(default)]
    pub enabled: bool,

    /// Model used for answer phrasing
    #[serde(default = "default_model")]
    pub model: String,

    /// Ollama endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; on expiry the desk falls back
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "qwen2.5:3b-instruct".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_timeout() -> u64 {
    8
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Config {
    /// Load from the standard path, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_have_llm_disabled() {
        let config = Config::default();
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.timeout_secs, 8);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[llm]\nenabled = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.llm.enabled);
        assert_eq!(config.llm.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.llm.model, "qwen2.5:3b-instruct");
    }

    #[test]
    fn missing_file_is_an_error_for_load_from() {
        assert!(Config::load_from("/nonexistent/liber.toml").is_err());
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.llm.enabled);
    }
}
