//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Seconds since the server state was built.
    pub uptime_seconds: u64,
}

/// Liveness probe of the plugin router.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub service: String,
}

impl PingResponse {
    pub fn plugins() -> Self {
        Self {
            ok: true,
            service: "plugins".to_string(),
        }
    }
}
