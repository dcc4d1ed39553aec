//! Server configuration
//!
//! Read from the TOML file named by `PALINDROME_SERVER_CONFIG`. A missing
//! variable or file means defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_ENV: &str = "PALINDROME_SERVER_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// tracing filter directive, overridden by `RUST_LOG`
    #[serde(default = "ServerConfig::default_log_filter")]
    pub log_filter: String,
    /// Longest request line accepted, in bytes
    #[serde(default = "ServerConfig::default_max_request_bytes")]
    pub max_request_bytes: usize,
}

impl ServerConfig {
    fn default_log_filter() -> String {
        "info".to_string()
    }

    fn default_max_request_bytes() -> usize {
        1024 * 1024
    }

    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str::<ServerConfig>(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: Self::default_log_filter(),
            max_request_bytes: Self::default_max_request_bytes(),
        }
    }
}
