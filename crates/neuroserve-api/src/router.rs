//! Route definitions for the NeuroServe HTTP API.

use axum::{Router, middleware as axum_middleware, routing::get, routing::post};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logging layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(plugin_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Plugin catalog and task dispatch
fn plugin_routes() -> Router<AppState> {
    Router::new()
        .route("/plugins", get(handlers::plugins::list_plugins))
        .route("/plugins/ping", get(handlers::plugins::ping))
        .route("/plugins/{name}", get(handlers::plugins::get_plugin))
        .route("/plugins/{name}/{task}", post(handlers::plugins::run_task))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
