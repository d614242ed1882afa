//! Gateway configuration.
//!
//! Loaded from `config.toml` in the working directory, then `PORT` overrides
//! the listen port. Every field has a default, so an absent file yields a
//! working gateway on port 5000. Only where to listen and where the engine
//! lives are configurable; the outbound search parameters are fixed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub solr: SolrConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Downstream search engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolrConfig {
    /// Full URL of the select handler
    #[serde(default = "default_solr_url")]
    pub url: String,
    /// Outbound request timeout. Unset means the client default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_solr_url() -> String {
    "http://localhost:8983/solr/jcg1/select".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            url: default_solr_url(),
            timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from file (if present) and environment
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?;
        config.apply_port_override(std::env::var("PORT").ok())?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        info!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `PORT` wins over the file.
    fn apply_port_override(&mut self, port: Option<String>) -> Result<()> {
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?;
        }
        Ok(())
    }
}
