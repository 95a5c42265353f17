//! CLI configuration file: a `[client]` and a `[host]` table.
//!
//! ```toml
//! [client]
//! api_base_url = "https://shell.example.com"
//! timeout_secs = 10
//!
//! [host]
//! conflict_mode = "strict"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use leavedesk_client::ClientConfig;
use leavedesk_module_host::HostConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub host: HostConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("invalid config file")?;
        config.client.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or broken.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|contents| Self::from_toml_str(&contents))
        {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config {:?}: {:#}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Applies command-line overrides on top of the file.
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.client.api_base_url = url;
        }
        if token.is_some() {
            self.client.token = token;
        }
        self
    }
}
