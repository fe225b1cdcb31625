//! Lazy plugin proxy.
//!
//! A [`LazyPlugin`] is cheap to construct and can be listed in a catalog
//! without paying for its backing implementation (model weights,
//! dictionaries, ...). The backing [`TaskService`] is built on the first
//! `load()` or task call, exactly once per proxy, and its handlers are
//! collected into a task-name table at that point.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::{PluginError, PluginResult, TaskError};
use crate::handler::{Payload, TaskHandler};
use crate::instance::PluginInstance;

/// The heavy implementation behind a [`LazyPlugin`].
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Task names the implementation provides.
    fn tasks(&self) -> Vec<String>;

    /// Optional initialization, run once right after construction.
    async fn load(&self) -> PluginResult<()> {
        Ok(())
    }

    /// Returns the handler for a task name.
    fn handler(&self, task: &str) -> Option<TaskHandler>;
}

type ServiceFactory = dyn Fn() -> PluginResult<Arc<dyn TaskService>> + Send + Sync;

struct Backing {
    handlers: HashMap<String, TaskHandler>,
    /// Kept alive for as long as the proxy lives.
    _service: Arc<dyn TaskService>,
}

struct LazyState {
    name: String,
    declared: Vec<String>,
    adopted: OnceLock<Vec<String>>,
    factory: Box<ServiceFactory>,
    backing: OnceCell<Backing>,
}

impl LazyState {
    fn tasks(&self) -> Vec<String> {
        if self.declared.is_empty() {
            self.adopted.get().cloned().unwrap_or_default()
        } else {
            self.declared.clone()
        }
    }

    /// Builds the backing implementation on first use.
    ///
    /// Concurrent callers wait on the same construction; a failed attempt
    /// leaves the cell empty so the next call retries.
    async fn ensure_loaded(&self) -> PluginResult<&Backing> {
        self.backing
            .get_or_try_init(|| async {
                debug!(plugin = %self.name, "Constructing backing implementation");

                let service = (self.factory)()?;
                service.load().await?;

                let service_tasks = service.tasks();
                if self.declared.is_empty() {
                    let _ = self.adopted.set(service_tasks.clone());
                }

                let handlers: HashMap<String, TaskHandler> = self
                    .declared
                    .iter()
                    .chain(service_tasks.iter())
                    .filter_map(|task| service.handler(task).map(|h| (task.clone(), h)))
                    .collect();

                info!(
                    plugin = %self.name,
                    tasks = handlers.len(),
                    "Backing implementation loaded"
                );

                Ok::<_, PluginError>(Backing {
                    handlers,
                    _service: service,
                })
            })
            .await
    }
}

/// Plugin proxy that forwards declared tasks to a lazily built service.
#[derive(Clone)]
pub struct LazyPlugin {
    provider: Option<String>,
    state: Arc<LazyState>,
}

impl LazyPlugin {
    /// Creates a proxy with a static task list and a backing factory.
    ///
    /// Pass an empty task list to adopt the backing implementation's tasks
    /// once it is loaded.
    pub fn new<I, S, F>(name: impl Into<String>, tasks: I, factory: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn() -> PluginResult<Arc<dyn TaskService>> + Send + Sync + 'static,
    {
        Self {
            provider: None,
            state: Arc::new(LazyState {
                name: name.into(),
                declared: tasks.into_iter().map(Into::into).collect(),
                adopted: OnceLock::new(),
                factory: Box::new(factory),
                backing: OnceCell::new(),
            }),
        }
    }

    /// Sets the provider reported in the descriptor.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Returns whether the backing implementation has been constructed.
    pub fn is_loaded(&self) -> bool {
        self.state.backing.initialized()
    }

    /// Invokes a declared task by name.
    pub async fn invoke(&self, task: &str, payload: Payload) -> PluginResult<Value> {
        let handler = self
            .task(task)
            .ok_or_else(|| PluginError::UnknownAttribute {
                plugin: self.state.name.clone(),
                attribute: task.to_string(),
            })?;
        Ok(handler.call(payload).await?)
    }

    fn forwarder(&self, task: &str) -> TaskHandler {
        let state = Arc::clone(&self.state);
        let task = task.to_string();

        TaskHandler::from_async(move |payload| {
            let state = Arc::clone(&state);
            let task = task.clone();
            async move {
                let backing = state
                    .ensure_loaded()
                    .await
                    .map_err(|e| TaskError::failed(e.to_string()))?;
                let handler = backing.handlers.get(&task).cloned().ok_or_else(|| {
                    TaskError::failed(
                        PluginError::UnknownAttribute {
                            plugin: state.name.clone(),
                            attribute: task.clone(),
                        }
                        .to_string(),
                    )
                })?;
                handler.call(payload).await
            }
        })
    }
}

impl fmt::Debug for LazyPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyPlugin")
            .field("name", &self.state.name)
            .field("provider", &self.provider)
            .field("tasks", &self.state.tasks())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[async_trait]
impl PluginInstance for LazyPlugin {
    fn name(&self) -> Option<String> {
        Some(self.state.name.clone())
    }

    fn provider(&self) -> Option<String> {
        self.provider.clone()
    }

    fn tasks(&self) -> Option<Vec<String>> {
        Some(self.state.tasks())
    }

    async fn load(&self) -> PluginResult<()> {
        self.state.ensure_loaded().await.map(|_| ())
    }

    fn task(&self, name: &str) -> Option<TaskHandler> {
        if self.state.tasks().iter().any(|t| t == name) {
            Some(self.forwarder(name))
        } else {
            None
        }
    }
}
