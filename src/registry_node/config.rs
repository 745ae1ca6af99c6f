use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Errors raised while loading or parsing a node configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO-related errors (file access, permissions, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a RegistryNode instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Directory holding the dataset files loaded at startup
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("faa_data")
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl NodeConfig {
    /// Create a new node configuration with the specified data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

/// Load a node configuration from the given path or from the `NODE_CONFIG`
/// environment variable.
///
/// If the file does not exist, a default [`NodeConfig`] is returned. A file
/// that exists but fails to parse is an error.
pub fn load_node_config(path: Option<&str>) -> Result<NodeConfig, ConfigError> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("NODE_CONFIG").ok())
        .unwrap_or_else(|| "config/node_config.json".to_string());

    match fs::read_to_string(&config_path) {
        Ok(config_str) => serde_json::from_str::<NodeConfig>(&config_str).map_err(|e| {
            log::error!("Failed to parse node configuration: {}", e);
            ConfigError::Json(e)
        }),
        Err(_) => Ok(NodeConfig::default()),
    }
}
