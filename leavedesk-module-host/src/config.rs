//! Host configuration (`[host]` table).

use serde::{Deserialize, Serialize};

use crate::error::{RegistrationError, RegistrationResult};

/// How registration treats named routes that sit on paths a module wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictMode {
    /// Remove the colliding routes and mount the module's subtree.
    #[default]
    Replace,
    /// Refuse when a colliding route belongs to another module or the host.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub conflict_mode: ConflictMode,
}

impl HostConfig {
    pub fn from_toml_str(contents: &str) -> RegistrationResult<Self> {
        toml::from_str(contents).map_err(|e| RegistrationError::Config(e.to_string()))
    }
}
