//! Configuration file support for reelboard
//!
//! Reads from .reelboard/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Backend-related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the movie-recommendation service
    /// Default: "http://127.0.0.1:8000"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    /// Default: 10
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Search-related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// Number of matches to request per query (backend caps at 20)
    /// Default: 3
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Ask the backend for an LLM summary alongside the results
    /// Default: false
    #[serde(default)]
    pub summarize: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_top_k() -> usize {
    3
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            summarize: false,
        }
    }
}

impl Config {
    /// Load config from .reelboard/config.toml
    /// Returns default config if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str(&contents) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Find config.toml by walking up directory tree
    fn find_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut dir = current_dir.as_path();

        loop {
            let config_path = dir.join(".reelboard").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }

    /// Effective backend URL: REELBOARD_BASE_URL env wins over the file.
    pub fn base_url(&self) -> String {
        std::env::var("REELBOARD_BASE_URL").unwrap_or_else(|_| self.backend.base_url.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.search.top_k, 3);
        assert!(!config.search.summarize);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[backend]
base_url = "http://movies.internal:9000"

[search]
top_k = 5
summarize = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "http://movies.internal:9000");
        // timeout_secs falls back to its serde default
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.search.top_k, 5);
        assert!(config.search.summarize);
    }
}
