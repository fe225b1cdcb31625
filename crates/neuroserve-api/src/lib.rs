//! # neuroserve-api
//!
//! HTTP API layer for NeuroServe built on Axum.
//!
//! Provides the plugin catalog and task dispatch endpoints, the built-in
//! plugin loader, middleware (CORS, request logging, timeout), DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use loader::{BuiltinLoader, builtin_modules};
pub use state::AppState;
