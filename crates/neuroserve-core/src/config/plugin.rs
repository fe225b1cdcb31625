//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Names of the built-in plugin modules to expose. Empty exposes all.
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl PluginConfig {
    /// Returns whether the module with the given name should be exposed.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.is_empty() || self.enabled.iter().any(|n| n == name)
    }
}
