//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use neuroserve_core::config::AppConfig;
use neuroserve_core::{AppError, AppResult};
use neuroserve_plugin::PluginManager;

use crate::loader::{BuiltinLoader, builtin_modules};
use crate::middleware::cors::build_cors_layer;
use crate::middleware::timeout::request_timeout;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(server.max_body_size_bytes))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http());

    if server.request_timeout_seconds > 0 {
        let limit = Duration::from_secs(server.request_timeout_seconds);
        app.layer(axum_middleware::from_fn_with_state(limit, request_timeout))
    } else {
        app
    }
}

/// Builds the application state with the built-in plugin loader.
pub fn build_state(config: AppConfig) -> AppState {
    let modules = builtin_modules(&config.plugins);
    let loader = Arc::new(BuiltinLoader::new(modules.clone()));
    let plugins = PluginManager::new(loader, modules);
    AppState::new(config, plugins)
}

/// Runs the NeuroServe server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting NeuroServe server...");

    let graceful = config.server.graceful_shutdown;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config);

    // Populate the registry before the first request arrives.
    state.plugins.ensure_initialized().await;

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NeuroServe listening on {}", addr);

    let server = axum::serve(listener, app);
    let result = if graceful {
        server.with_graceful_shutdown(shutdown_signal()).await
    } else {
        server.await
    };
    result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
