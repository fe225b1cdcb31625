//! Task handlers: uniform wrapper over synchronous and asynchronous task
//! functions.
//!
//! Synchronous handlers run on the blocking pool and asynchronous handlers
//! on their own runtime task, so one slow handler never stalls unrelated
//! requests. A panic inside either kind is captured and reported as a
//! [`TaskError::Failed`].

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use tokio::task::JoinError;

use crate::error::TaskError;

/// JSON object submitted to a task.
pub type Payload = serde_json::Map<String, Value>;

/// Result of a single task invocation.
pub type TaskResult = Result<Value, TaskError>;

type AsyncFn = dyn Fn(Payload) -> BoxFuture<'static, TaskResult> + Send + Sync;
type BlockingFn = dyn Fn(Payload) -> TaskResult + Send + Sync;

#[derive(Clone)]
enum HandlerKind {
    Async(Arc<AsyncFn>),
    Blocking(Arc<BlockingFn>),
}

/// A callable task bound to a plugin.
#[derive(Clone)]
pub struct TaskHandler {
    kind: HandlerKind,
}

impl TaskHandler {
    /// Wraps an asynchronous task function.
    pub fn from_async<F, Fut>(handler: F) -> Self
    where
        F: Fn(Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        Self {
            kind: HandlerKind::Async(Arc::new(move |payload| handler(payload).boxed())),
        }
    }

    /// Wraps a synchronous task function. It is executed on the blocking pool.
    pub fn blocking<F>(handler: F) -> Self
    where
        F: Fn(Payload) -> TaskResult + Send + Sync + 'static,
    {
        Self {
            kind: HandlerKind::Blocking(Arc::new(handler)),
        }
    }

    /// Returns whether the handler is asynchronous.
    pub fn is_async(&self) -> bool {
        matches!(self.kind, HandlerKind::Async(_))
    }

    /// Invokes the handler and waits for it to finish.
    pub async fn call(&self, payload: Payload) -> TaskResult {
        let joined = match &self.kind {
            HandlerKind::Async(handler) => tokio::spawn(handler(payload)).await,
            HandlerKind::Blocking(handler) => {
                let handler = Arc::clone(handler);
                tokio::task::spawn_blocking(move || handler(payload)).await
            }
        };

        joined.unwrap_or_else(|err| Err(TaskError::Failed(join_error_message(err))))
    }
}

impl fmt::Debug for TaskHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandler")
            .field("async", &self.is_async())
            .finish()
    }
}

fn join_error_message(err: JoinError) -> String {
    if err.is_panic() {
        panic_message(err.into_panic())
    } else {
        "task was cancelled".to_string()
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "task panicked".to_string()
    }
}
