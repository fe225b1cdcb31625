//! Shared application state for Axum handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use neuroserve_core::config::AppConfig;
use neuroserve_plugin::PluginManager;

/// Application state shared across all handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Plugin resolution and dispatch.
    pub plugins: Arc<PluginManager>,
    /// When the state was built.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, plugins: PluginManager) -> Self {
        Self {
            config: Arc::new(config),
            plugins: Arc::new(plugins),
            started_at: Utc::now(),
        }
    }
}
