//! Plugin catalog and task dispatch handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use neuroserve_core::error::AppError;
use neuroserve_plugin::{Payload, PluginDescriptor, TaskOutcome};

use crate::dto::response::PingResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /plugins/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::plugins())
}

/// GET /plugins
pub async fn list_plugins(State(state): State<AppState>) -> Json<Vec<PluginDescriptor>> {
    Json(state.plugins.list().await)
}

/// GET /plugins/{name}
pub async fn get_plugin(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<PluginDescriptor>> {
    let descriptor = state.plugins.describe(&name).await?;
    Ok(Json(descriptor))
}

/// POST /plugins/{name}/{task}
///
/// The body must be a JSON object; it is handed to the task unchanged.
/// Body rejections keep the extractor's status (400, 413, 415 or 422).
pub async fn run_task(
    State(state): State<AppState>,
    Path((name, task)): Path<(String, String)>,
    body: Result<Json<Payload>, JsonRejection>,
) -> ApiResult<Json<TaskOutcome>> {
    let Json(payload) = body.map_err(|rejection| {
        AppError::status(rejection.status().as_u16(), rejection.body_text())
    })?;

    tracing::debug!(plugin = %name, task = %task, "Running plugin task");
    let outcome = state.plugins.run(&name, &task, payload).await?;
    Ok(Json(outcome))
}
