//! Client configuration, the `[client]` table of the CLI config file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::request::BaseScope;

/// Where and how the transport talks to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and authority of the shell API (e.g. `https://shell.example.com`).
    pub api_base_url: String,
    /// Prefix for module-scoped entity calls.
    pub module_base_path: String,
    /// Prefix for admin-scoped calls (user listing).
    pub admin_base_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Static bearer token. Usually injected at runtime rather than stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:7788".to_string(),
            module_base_path: "/admin/v1/modules/hr/v1".to_string(),
            admin_base_path: "/admin/admin/v1".to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `api_base_url` with default base paths.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Parses a standalone TOML document.
    pub fn from_toml_str(contents: &str) -> ClientResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClientResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        for (name, path) in [
            ("module_base_path", &self.module_base_path),
            ("admin_base_path", &self.admin_base_path),
        ] {
            if !path.starts_with('/') {
                return Err(ClientError::Config(format!("{name} must start with '/'")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute base URL for a scope, without trailing slash.
    pub fn base_url(&self, scope: BaseScope) -> String {
        let prefix = match scope {
            BaseScope::Module => &self.module_base_path,
            BaseScope::Admin => &self.admin_base_path,
        };
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            prefix.trim_end_matches('/')
        )
    }
}
