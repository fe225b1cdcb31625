//! Application configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate and
//! overlaid with `NEUROSERVE__*` environment variables. Every field has a
//! default, so an absent file yields a runnable configuration.

pub mod app;
pub mod logging;
pub mod plugin;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::plugin::PluginConfig;

use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Plugin system settings.
    #[serde(default)]
    pub plugins: PluginConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `NEUROSERVE`
    /// prefix with `__` as the section separator, e.g.
    /// `NEUROSERVE__SERVER__PORT=9000`.
    pub fn load(path: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("NEUROSERVE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("plugins.enabled")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
