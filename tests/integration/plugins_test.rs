//! Integration tests for the plugin routes with the built-in plugins.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use neuroserve_core::config::{AppConfig, PluginConfig};

#[tokio::test]
async fn test_ping() {
    let app = helpers::TestApp::new();
    let response = app.get("/plugins/ping").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"ok": true, "service": "plugins"}));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], json!("ok"));
    assert!(response.body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_list_plugins() {
    let app = helpers::TestApp::new();
    let response = app.get("/plugins").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{
            "name": "text_tools",
            "provider": "local",
            "tasks": ["arabic_normalize", "spellcheck_ar"]
        }])
    );
}

#[tokio::test]
async fn test_registered_instance_is_shared() {
    let app = helpers::TestApp::new();
    let _ = app.get("/plugins").await;

    let first = app.state.plugins.resolve("text_tools").await.expect("registered");
    let second = app.state.plugins.resolve("text_tools").await.expect("registered");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.provider().as_deref(), Some("local"));
}

#[tokio::test]
async fn test_get_plugin() {
    let app = helpers::TestApp::new();

    let response = app.get("/plugins/text_tools").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], json!("text_tools"));
    assert_eq!(response.body["provider"], json!("local"));

    let response = app.get("/plugins/ghost_plugin").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Plugin not found: ghost_plugin");
}

#[tokio::test]
async fn test_run_arabic_normalize() {
    let app = helpers::TestApp::new();
    let response = app
        .post(
            "/plugins/text_tools/arabic_normalize",
            json!({"text": "أَهْلاً   وَسَهْلاً", "normalize_teh_marbuta": true}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["plugin"], json!("text_tools"));
    assert_eq!(response.body["task"], json!("arabic_normalize"));
    assert_eq!(response.body["result"]["text"], json!("اهلا وسهلا"));
    assert_eq!(response.body["result"]["changed"], json!(true));
}

#[tokio::test]
async fn test_run_spellcheck() {
    let app = helpers::TestApp::new();
    let response = app
        .post("/plugins/text_tools/spellcheck_ar", json!({"text": "شكراااا جزيلا"}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let result = &response.body["result"];
    assert_eq!(result["text"], json!("شكرا جزيلا"));
    assert_eq!(result["issues"][0]["word"], json!("شكراااا"));
    assert_eq!(result["issues"][0]["reason"], json!("elongation"));
}

#[tokio::test]
async fn test_unknown_task_lists_declared_tasks() {
    let app = helpers::TestApp::new();
    let response = app
        .post("/plugins/text_tools/translate", json!({"text": "x"}))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Task 'translate' not found in plugin 'text_tools'. Available: ['arabic_normalize', 'spellcheck_ar']"
    );
}

#[tokio::test]
async fn test_unknown_plugin() {
    let app = helpers::TestApp::new();
    let response = app.post("/plugins/ghost_plugin/run", json!({})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Plugin not found: ghost_plugin");
}

#[tokio::test]
async fn test_handler_bad_request_passes_through() {
    let app = helpers::TestApp::new();
    let response = app
        .post("/plugins/text_tools/arabic_normalize", json!({"body": "x"}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.detail().starts_with("Invalid payload:"));
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .post("/plugins/text_tools/arabic_normalize", json!(["text"]))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.detail().is_empty());
}

#[tokio::test]
async fn test_body_rejections_keep_their_status() {
    let app = helpers::TestApp::new();

    let response = app
        .request_raw(
            "POST",
            "/plugins/text_tools/arabic_normalize",
            "{\"text\": \"x\"}".to_string(),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(!response.detail().is_empty());

    let response = app
        .request_raw(
            "POST",
            "/plugins/text_tools/arabic_normalize",
            "{\"text\": ".to_string(),
            Some("application/json"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.detail().is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_413() {
    let mut config = AppConfig::default();
    config.server.max_body_size_bytes = 16;
    let app = helpers::TestApp::with_config(config);

    let response = app
        .post(
            "/plugins/text_tools/arabic_normalize",
            json!({"text": "a body well over sixteen bytes"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.detail().contains("length limit exceeded"));
}

#[tokio::test]
async fn test_disabled_plugin_is_not_registered() {
    let config = AppConfig {
        plugins: PluginConfig {
            enabled: vec!["pdf_reader".to_string()],
        },
        ..Default::default()
    };
    let app = helpers::TestApp::with_config(config);

    let response = app.get("/plugins").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = app
        .post("/plugins/text_tools/arabic_normalize", json!({"text": "x"}))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Plugin not found: text_tools");
}
