use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Upload root; category folders are created beneath it.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Path to the JSON routing-rules file. A missing or malformed file
    /// falls back to the built-in table.
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            rules_path: default_rules_path(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_rules_path() -> PathBuf {
    PathBuf::from("organizer_config.json")
}

fn default_max_upload_bytes() -> usize {
    200 * 1024 * 1024 // 200 MiB
}
