//! Plugin manager: the facade the HTTP layer talks to.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::descriptor::PluginDescriptor;
use crate::dispatcher::{TaskDispatcher, TaskOutcome};
use crate::enumerator::PluginEnumerator;
use crate::error::{DispatchError, PluginError};
use crate::handler::Payload;
use crate::instance::SharedInstance;
use crate::loader::PluginLoader;
use crate::modules::ModuleTable;
use crate::resolver::PluginResolver;

/// Owns the loader together with resolution, enumeration and dispatch.
#[derive(Debug)]
pub struct PluginManager {
    /// The loader collaborator.
    loader: Arc<dyn PluginLoader>,
    /// Name-to-instance resolution.
    resolver: PluginResolver,
    /// Catalog enumeration.
    enumerator: PluginEnumerator,
    /// Task dispatch.
    dispatcher: TaskDispatcher,
    /// Set once the loader has initialized successfully.
    initialized: OnceCell<()>,
}

impl PluginManager {
    /// Creates a manager with the default strategy chains.
    pub fn new(loader: Arc<dyn PluginLoader>, modules: ModuleTable) -> Self {
        Self {
            resolver: PluginResolver::for_loader(Arc::clone(&loader), modules),
            enumerator: PluginEnumerator::for_loader(Arc::clone(&loader)),
            loader,
            dispatcher: TaskDispatcher::new(),
            initialized: OnceCell::new(),
        }
    }

    /// Runs the loader's initialization hook once per process.
    ///
    /// Concurrent callers share one attempt. A failure is logged and the
    /// next call tries again; a loader without the hook counts as
    /// initialized.
    pub async fn ensure_initialized(&self) {
        let result = self
            .initialized
            .get_or_try_init(|| async {
                match self.loader.initialize().await {
                    Some(Ok(())) => {
                        info!("Plugin loader initialized");
                        Ok(())
                    }
                    Some(Err(e)) => Err(e),
                    None => {
                        debug!("Plugin loader has no initialization hook");
                        Ok::<(), PluginError>(())
                    }
                }
            })
            .await;

        if let Err(e) = result {
            error!(error = %e, "Plugin loader initialization failed");
        }
    }

    /// Returns whether loader initialization has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Descriptors of every discoverable plugin.
    pub async fn list(&self) -> Vec<PluginDescriptor> {
        self.ensure_initialized().await;
        self.enumerator
            .enumerate()
            .await
            .iter()
            .map(|instance| PluginDescriptor::of(instance.as_ref()))
            .collect()
    }

    /// The catalog entry for `name`.
    pub async fn describe(&self, name: &str) -> Result<PluginDescriptor, DispatchError> {
        self.list()
            .await
            .into_iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| DispatchError::PluginNotFound {
                plugin: name.to_string(),
            })
    }

    /// Resolves a plugin instance by name.
    pub async fn resolve(&self, name: &str) -> Option<SharedInstance> {
        self.ensure_initialized().await;
        self.resolver.resolve(name).await
    }

    /// Resolves `plugin` and dispatches `task` to it.
    pub async fn run(
        &self,
        plugin: &str,
        task: &str,
        payload: Payload,
    ) -> Result<TaskOutcome, DispatchError> {
        let instance = self.resolve(plugin).await;
        self.dispatcher.dispatch(plugin, instance, task, payload).await
    }
}
