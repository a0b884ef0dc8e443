//! Engine configuration
//!
//! Loaded from `~/.config/sagegraph/config.yaml` (or an explicit path) with
//! environment overrides for the service endpoint and credential. Every
//! field has a default, so a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the bearer credential
pub const API_KEY_ENV: &str = "SAGEGRAPH_API_KEY";

/// Environment variable overriding the service base URL
pub const BASE_URL_ENV: &str = "SAGEGRAPH_BASE_URL";

/// Depth used when a neighborhood query names a center but no depth
pub const DEFAULT_DEPTH: i32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Remote concept service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Set to false to never attempt the network
    pub enabled: bool,
    pub base_url: String,
    /// Bearer credential; never written back out
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:3000".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

/// Durable cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Set to false to keep only the in-memory tier
    pub durable: bool,
    /// SQLite file; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            durable: true,
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub remote: RemoteConfig,
    pub cache: CacheConfig,
    pub default_depth: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            cache: CacheConfig::default(),
            default_depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML file without applying overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document is valid and means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.remote.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.remote.base_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("remote.base_url is empty".into()));
        }
        if self.remote.timeout_secs == 0 {
            return Err(ConfigError::Invalid("remote.timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Where the durable cache lives
    pub fn durable_cache_path(&self) -> PathBuf {
        self.cache.path.clone().unwrap_or_else(default_cache_path)
    }
}

/// `~/.config/sagegraph/config.yaml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sagegraph").join("config.yaml"))
}

/// `~/.local/share/sagegraph/cache.db` (platform equivalent)
pub fn default_cache_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("sagegraph").join("cache.db")
}
