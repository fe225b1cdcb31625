//! HTTP request handlers.

pub mod health;
pub mod plugins;
