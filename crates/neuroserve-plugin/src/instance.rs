//! The plugin instance contract.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PluginResult;
use crate::handler::TaskHandler;

/// Shared handle to a live plugin instance.
pub type SharedInstance = Arc<dyn PluginInstance>;

/// A live plugin object.
///
/// Every capability is optional: a plugin may lack a name, may not know its
/// tasks until loaded, and may expose a generic `infer` fallback instead of
/// (or in addition to) named tasks.
#[async_trait]
pub trait PluginInstance: Send + Sync + fmt::Debug {
    /// The plugin's own name, if it has one.
    fn name(&self) -> Option<String> {
        None
    }

    /// Short runtime type name, used when the instance has no name.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Who provides the plugin (e.g. `"local"`).
    fn provider(&self) -> Option<String> {
        None
    }

    /// Declared task names. `None` means the plugin does not declare them.
    fn tasks(&self) -> Option<Vec<String>> {
        None
    }

    /// Lifecycle hook run before the plugin is first used.
    async fn load(&self) -> PluginResult<()> {
        Ok(())
    }

    /// Looks up the callable for a task name.
    fn task(&self, name: &str) -> Option<TaskHandler>;

    /// Generic handler receiving the task name inside its payload.
    fn infer(&self) -> Option<TaskHandler> {
        None
    }
}

/// Gives a name to an instance that was constructed without one.
#[derive(Debug)]
pub struct NamedInstance {
    name: String,
    inner: SharedInstance,
}

impl NamedInstance {
    /// Wraps `inner`, reporting `name` as its name.
    pub fn new(name: impl Into<String>, inner: SharedInstance) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }
}

#[async_trait]
impl PluginInstance for NamedInstance {
    fn name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn provider(&self) -> Option<String> {
        self.inner.provider()
    }

    fn tasks(&self) -> Option<Vec<String>> {
        self.inner.tasks()
    }

    async fn load(&self) -> PluginResult<()> {
        self.inner.load().await
    }

    fn task(&self, name: &str) -> Option<TaskHandler> {
        self.inner.task(name)
    }

    fn infer(&self) -> Option<TaskHandler> {
        self.inner.infer()
    }
}
