//! Task dispatch against a resolved plugin instance.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::descriptor::PluginDescriptor;
use crate::error::{DispatchError, TaskError};
use crate::handler::Payload;
use crate::instance::SharedInstance;

/// Successful dispatch result, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOutcome {
    /// The plugin name as requested by the caller.
    pub plugin: String,
    pub task: String,
    pub result: Value,
}

/// Selects and invokes the handler for one task call.
///
/// Stateless; one dispatcher is shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskDispatcher;

impl TaskDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Runs `task` on `instance`.
    ///
    /// The named task handler is preferred; otherwise the instance's `infer`
    /// fallback receives the payload with `task` inserted if absent.
    pub async fn dispatch(
        &self,
        plugin: &str,
        instance: Option<SharedInstance>,
        task: &str,
        payload: Payload,
    ) -> Result<TaskOutcome, DispatchError> {
        let Some(instance) = instance else {
            return Err(DispatchError::PluginNotFound {
                plugin: plugin.to_string(),
            });
        };

        if let Some(handler) = instance.task(task) {
            debug!(plugin = %plugin, task = %task, "Dispatching task");
            let result = handler.call(payload).await.map_err(|e| {
                normalize(e, |message| DispatchError::TaskExecutionFailed {
                    task: task.to_string(),
                    message,
                })
            })?;
            return Ok(outcome(plugin, task, result));
        }

        if let Some(infer) = instance.infer() {
            debug!(plugin = %plugin, task = %task, "Dispatching through infer fallback");
            let mut payload = payload;
            payload
                .entry("task")
                .or_insert_with(|| Value::String(task.to_string()));
            let result = infer.call(payload).await.map_err(|e| {
                normalize(e, |message| DispatchError::InferExecutionFailed {
                    task: task.to_string(),
                    message,
                })
            })?;
            return Ok(outcome(plugin, task, result));
        }

        Err(DispatchError::TaskNotFound {
            task: task.to_string(),
            plugin: plugin.to_string(),
            available: PluginDescriptor::of(instance.as_ref()).tasks,
        })
    }
}

fn outcome(plugin: &str, task: &str, result: Value) -> TaskOutcome {
    TaskOutcome {
        plugin: plugin.to_string(),
        task: task.to_string(),
        result,
    }
}

/// Structured errors pass through; everything else is wrapped by `wrap`.
fn normalize(err: TaskError, wrap: impl FnOnce(String) -> DispatchError) -> DispatchError {
    match err {
        TaskError::Http { status, detail } => DispatchError::Http { status, detail },
        TaskError::Failed(message) => {
            warn!(error = %message, "Task execution failed");
            wrap(message)
        }
    }
}
