//! Server configuration

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Server configuration, loadable from a TOML file. Every field has a
/// default so a partial file (or none at all) works.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds on
    pub bind: String,
    /// Search depth used when a request does not specify one
    pub depth: u8,
    /// Side ('o' or 'x') predicted for when a request does not specify one
    pub side: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            depth: 3,
            side: "x".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
