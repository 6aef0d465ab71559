//! YAML configuration
//!
//! The hosting application keeps its settings in a `config.yaml`; the
//! path is always passed in explicitly. Every field has a default so a
//! partial (or absent) file still yields a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use trellis_core::TopLevelThresholds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub graph: GraphConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub notes_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            notes_dir: PathBuf::from("notes"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Hub rule: minimum outbound references to qualify.
    pub hub_min_outbound: usize,
    /// Hub rule: maximum inbound references to qualify.
    pub hub_max_inbound: usize,
    /// Depth used by `/graph/enhanced` when the query omits one.
    pub default_depth: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        let thresholds = TopLevelThresholds::default();
        GraphConfig {
            hub_min_outbound: thresholds.min_outbound,
            hub_max_inbound: thresholds.max_inbound,
            default_depth: 2,
        }
    }
}

impl GraphConfig {
    pub fn thresholds(&self) -> TopLevelThresholds {
        TopLevelThresholds {
            min_outbound: self.hub_min_outbound,
            max_inbound: self.hub_max_inbound,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 7891,
        }
    }
}

impl Config {
    /// Load from a YAML file. A missing file yields the defaults;
    /// unreadable or malformed content is an error.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
