//! The built-in plugin loader.
//!
//! Plugins are linked into the binary and listed in a [`ModuleTable`]. The
//! loader's initialization hook constructs each enabled module once and
//! keeps the instance for the life of the process.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use neuroserve_core::config::PluginConfig;
use neuroserve_plugin::{
    ModuleTable, PluginError, PluginLoader, PluginResult, Registry, SharedInstance,
};
use plugin_text_tools::TextToolsPlugin;

/// Builds the module table of built-in plugins, filtered by configuration.
pub fn builtin_modules(config: &PluginConfig) -> ModuleTable {
    let mut modules = ModuleTable::new();

    if config.is_enabled(TextToolsPlugin::NAME) {
        modules.register(TextToolsPlugin::NAME, || {
            Ok(Arc::new(TextToolsPlugin::create()) as SharedInstance)
        });
    }

    for name in &config.enabled {
        if !modules.contains(name) {
            warn!(plugin = %name, "Enabled plugin is not built in");
        }
    }

    modules
}

/// Loader over the built-in module table.
#[derive(Debug)]
pub struct BuiltinLoader {
    modules: ModuleTable,
    registered: RwLock<BTreeMap<String, SharedInstance>>,
}

impl BuiltinLoader {
    pub fn new(modules: ModuleTable) -> Self {
        Self {
            modules,
            registered: RwLock::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl PluginLoader for BuiltinLoader {
    /// Registers every module not registered yet. Modules that fail to
    /// construct are reported together and retried on the next call.
    async fn initialize(&self) -> Option<PluginResult<()>> {
        let mut registered = self.registered.write().await;
        let mut failed = Vec::new();

        for name in self.modules.names() {
            if registered.contains_key(&name) {
                continue;
            }
            match self.modules.construct(&name) {
                Some(Ok(instance)) => {
                    info!(plugin = %name, "Plugin registered");
                    registered.insert(name, instance);
                }
                Some(Err(e)) => {
                    warn!(plugin = %name, error = %e, "Plugin construction failed");
                    failed.push(name);
                }
                None => {}
            }
        }

        if failed.is_empty() {
            Some(Ok(()))
        } else {
            Some(Err(PluginError::loader(format!(
                "failed to register: {}",
                failed.join(", ")
            ))))
        }
    }

    async fn instance(&self, name: &str) -> Option<PluginResult<Option<SharedInstance>>> {
        Some(Ok(self.registered.read().await.get(name).cloned()))
    }

    async fn registry(&self) -> Option<Registry> {
        Some(Registry::Mapping(self.registered.read().await.clone()))
    }
}
