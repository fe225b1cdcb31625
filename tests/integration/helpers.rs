//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use neuroserve_api::{AppState, build_app, build_state};
use neuroserve_core::config::AppConfig;
use neuroserve_plugin::PluginManager;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct access to the plugin manager
    pub state: AppState,
}

impl TestApp {
    /// Test application with the built-in plugins and default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Test application with the built-in plugins and the given config
    pub fn with_config(config: AppConfig) -> Self {
        Self::from_state(build_state(config))
    }

    /// Test application around a custom plugin manager
    pub fn with_manager(manager: PluginManager) -> Self {
        Self::with_config_and_manager(AppConfig::default(), manager)
    }

    /// Test application around a custom plugin manager and config
    pub fn with_config_and_manager(config: AppConfig, manager: PluginManager) -> Self {
        Self::from_state(AppState::new(config, manager))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str, Some("application/json"))
            .await
    }

    /// Make a request with an arbitrary body and content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: String,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `detail` string of an error body
    pub fn detail(&self) -> &str {
        self.body
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}
