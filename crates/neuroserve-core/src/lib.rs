//! # neuroserve-core
//!
//! Core crate for NeuroServe. Contains configuration schemas, logging
//! initialization and the unified error system shared by the plugin layer
//! and the HTTP API.
//!
//! This crate has **no** internal dependencies on other NeuroServe crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
