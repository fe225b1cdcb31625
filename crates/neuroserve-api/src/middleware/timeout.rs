//! Request deadline middleware.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use neuroserve_core::AppError;

use crate::error::ApiError;

/// Answers 408 with a `{detail}` body once `limit` has elapsed.
///
/// The in-flight handler future is dropped; blocking task bodies already on
/// the blocking pool run to completion in the background.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(
                method = %method,
                path = %path,
                timeout_secs = limit.as_secs(),
                "Request timed out"
            );
            ApiError::from(AppError::status(
                408,
                format!("Request timed out after {}s", limit.as_secs()),
            ))
            .into_response()
        }
    }
}
