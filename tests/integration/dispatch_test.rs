//! Integration tests for resolution and dispatch with custom loaders.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::{Value, json};

use neuroserve_core::config::AppConfig;
use neuroserve_plugin::{
    ModuleTable, PluginError, PluginInstance, PluginLoader, PluginManager, PluginResult,
    Registry, SharedInstance, TaskError, TaskHandler,
};

/// Plugin with one task per failure mode.
#[derive(Debug)]
struct Workbench;

impl PluginInstance for Workbench {
    fn name(&self) -> Option<String> {
        Some("workbench".into())
    }

    fn provider(&self) -> Option<String> {
        Some("tests".into())
    }

    fn tasks(&self) -> Option<Vec<String>> {
        Some(vec![
            "echo".into(),
            "explode".into(),
            "panic".into(),
            "conflict".into(),
        ])
    }

    fn task(&self, name: &str) -> Option<TaskHandler> {
        match name {
            "echo" => Some(TaskHandler::from_async(|p| async move { Ok(Value::Object(p)) })),
            "explode" => Some(TaskHandler::blocking(|_| Err(TaskError::failed("boom")))),
            "panic" => Some(TaskHandler::blocking(|_| panic!("handler panicked"))),
            "conflict" => Some(TaskHandler::blocking(|_| {
                Err(TaskError::http(409, "Job already running"))
            })),
            _ => None,
        }
    }
}

/// Plugin without named tasks that answers everything through `infer`.
#[derive(Debug)]
struct Oracle;

impl PluginInstance for Oracle {
    fn name(&self) -> Option<String> {
        Some("oracle".into())
    }

    fn task(&self, _name: &str) -> Option<TaskHandler> {
        None
    }

    fn infer(&self) -> Option<TaskHandler> {
        Some(TaskHandler::blocking(|p| Ok(json!({"seen": Value::Object(p)}))))
    }
}

/// Plugin without a name, only reachable through direct construction.
#[derive(Debug)]
struct Anonymous;

impl PluginInstance for Anonymous {
    fn task(&self, name: &str) -> Option<TaskHandler> {
        (name == "hello").then(|| TaskHandler::blocking(|_| Ok(json!("hi"))))
    }
}

/// Plugin whose `nap` task outlives any request deadline.
#[derive(Debug)]
struct Sleeper;

impl PluginInstance for Sleeper {
    fn name(&self) -> Option<String> {
        Some("sleeper".into())
    }

    fn tasks(&self) -> Option<Vec<String>> {
        Some(vec!["nap".into(), "blink".into()])
    }

    fn task(&self, name: &str) -> Option<TaskHandler> {
        match name {
            "nap" => Some(TaskHandler::from_async(|_| async move {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(json!("rested"))
            })),
            "blink" => Some(TaskHandler::from_async(|_| async move { Ok(json!("awake")) })),
            _ => None,
        }
    }
}

/// Exposes a catalog and an instance lookup.
#[derive(Debug)]
struct CatalogLoader;

#[async_trait]
impl PluginLoader for CatalogLoader {
    async fn catalog(&self) -> Option<PluginResult<Registry>> {
        Some(Ok(Registry::Sequence(vec![
            Arc::new(Workbench) as SharedInstance,
            Arc::new(Oracle),
        ])))
    }

    async fn instance(&self, name: &str) -> Option<PluginResult<Option<SharedInstance>>> {
        Some(Ok(match name {
            "workbench" => Some(Arc::new(Workbench) as SharedInstance),
            "oracle" => Some(Arc::new(Oracle) as SharedInstance),
            _ => None,
        }))
    }
}

/// Instance lookup always fails; the registry still knows the plugin.
#[derive(Debug)]
struct BrokenLookupLoader;

#[async_trait]
impl PluginLoader for BrokenLookupLoader {
    async fn instance(&self, _name: &str) -> Option<PluginResult<Option<SharedInstance>>> {
        Some(Err(PluginError::loader("lookup table corrupted")))
    }

    async fn registry(&self) -> Option<Registry> {
        Some(Registry::Sequence(vec![Arc::new(Workbench) as SharedInstance]))
    }
}

/// Fails its first initialization, then exposes a registry.
#[derive(Debug, Default)]
struct SlowStartLoader {
    attempts: AtomicUsize,
}

#[async_trait]
impl PluginLoader for SlowStartLoader {
    async fn initialize(&self) -> Option<PluginResult<()>> {
        if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            Some(Err(PluginError::loader("plugin directory not mounted")))
        } else {
            Some(Ok(()))
        }
    }

    async fn registry(&self) -> Option<Registry> {
        if self.attempts.load(Ordering::SeqCst) < 2 {
            return Some(Registry::Sequence(Vec::new()));
        }
        Some(Registry::Sequence(vec![Arc::new(Workbench) as SharedInstance]))
    }
}

#[derive(Debug)]
struct EmptyLoader;

impl PluginLoader for EmptyLoader {}

fn catalog_app() -> helpers::TestApp {
    helpers::TestApp::with_manager(PluginManager::new(
        Arc::new(CatalogLoader),
        ModuleTable::new(),
    ))
}

#[tokio::test]
async fn test_catalog_listing() {
    let app = catalog_app();
    let response = app.get("/plugins").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["name"], json!("workbench"));
    assert_eq!(response.body[1], json!({"name": "oracle", "provider": null, "tasks": []}));
}

#[tokio::test]
async fn test_named_task_success() {
    let app = catalog_app();
    let response = app.post("/plugins/workbench/echo", json!({"n": 1})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"plugin": "workbench", "task": "echo", "result": {"n": 1}})
    );
}

#[tokio::test]
async fn test_task_failure_is_500() {
    let app = catalog_app();
    let response = app.post("/plugins/workbench/explode", json!({})).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.detail(), "Task 'explode' failed: boom");
}

#[tokio::test]
async fn test_task_panic_is_500() {
    let app = catalog_app();
    let response = app.post("/plugins/workbench/panic", json!({})).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.detail(), "Task 'panic' failed: handler panicked");
}

#[tokio::test]
async fn test_structured_error_keeps_status() {
    let app = catalog_app();
    let response = app.post("/plugins/workbench/conflict", json!({})).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.detail(), "Job already running");
}

#[tokio::test]
async fn test_infer_fallback() {
    let app = catalog_app();

    let response = app.post("/plugins/oracle/summarize", json!({"x": 1})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["task"], json!("summarize"));
    assert_eq!(
        response.body["result"],
        json!({"seen": {"x": 1, "task": "summarize"}})
    );

    let response = app
        .post("/plugins/oracle/summarize", json!({"task": "caller_choice"}))
        .await;
    assert_eq!(response.body["result"], json!({"seen": {"task": "caller_choice"}}));
}

#[tokio::test]
async fn test_failed_strategy_falls_through_to_registry() {
    let app = helpers::TestApp::with_manager(PluginManager::new(
        Arc::new(BrokenLookupLoader),
        ModuleTable::new(),
    ));
    let response = app.post("/plugins/workbench/echo", json!({"ok": true})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"], json!({"ok": true}));
}

#[tokio::test]
async fn test_direct_construction_fallback() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    let modules = ModuleTable::new().with("greeter", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Anonymous) as SharedInstance)
    });
    let app = helpers::TestApp::with_manager(PluginManager::new(Arc::new(EmptyLoader), modules));

    let response = app.get("/plugins").await;
    assert_eq!(response.body, json!([]));

    let response = app.post("/plugins/greeter/hello", json!({})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"plugin": "greeter", "task": "hello", "result": "hi"})
    );

    let response = app.post("/plugins/greeter/bye", json!({})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Task 'bye' not found in plugin 'greeter'. Available: ['<none>']"
    );

    let instance = app.state.plugins.resolve("greeter").await.expect("constructed");
    assert_eq!(instance.name().as_deref(), Some("greeter"));
    assert_eq!(constructed.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_initialization_retried_after_failure() {
    let app = helpers::TestApp::with_manager(PluginManager::new(
        Arc::new(SlowStartLoader::default()),
        ModuleTable::new(),
    ));

    let response = app.get("/plugins").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
    assert!(!app.state.plugins.is_initialized());

    let response = app.get("/plugins").await;
    assert_eq!(response.body[0]["name"], json!("workbench"));
    assert!(app.state.plugins.is_initialized());

    let response = app.get("/plugins/workbench").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn test_slow_task_times_out_with_detail() {
    let mut config = AppConfig::default();
    config.server.request_timeout_seconds = 1;
    let modules = ModuleTable::new().with("sleeper", || Ok(Arc::new(Sleeper) as SharedInstance));
    let app = helpers::TestApp::with_config_and_manager(
        config,
        PluginManager::new(Arc::new(EmptyLoader), modules),
    );

    let response = app.post("/plugins/sleeper/nap", json!({})).await;
    assert_eq!(response.status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(response.detail(), "Request timed out after 1s");

    let response = app.post("/plugins/sleeper/blink", json!({})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"], json!("awake"));
}
