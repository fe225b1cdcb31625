//! Name-to-instance resolution over an ordered strategy chain.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::instance::SharedInstance;
use crate::loader::PluginLoader;
use crate::modules::ModuleTable;
use crate::strategy::{DirectConstruction, InstanceLookup, RegistryLookup, SharedStrategy};

/// Resolves plugin names to live instances.
#[derive(Debug, Clone)]
pub struct PluginResolver {
    strategies: Vec<SharedStrategy>,
}

impl PluginResolver {
    /// The default chain: instance lookup, registry lookup, then direct
    /// construction from `modules`.
    pub fn for_loader(loader: Arc<dyn PluginLoader>, modules: ModuleTable) -> Self {
        let strategies: Vec<SharedStrategy> = vec![
            Arc::new(InstanceLookup::new(Arc::clone(&loader))),
            Arc::new(RegistryLookup::new(loader)),
            Arc::new(DirectConstruction::new(modules)),
        ];
        Self::with_strategies(strategies)
    }

    /// Uses an explicit strategy chain, tried in order.
    pub fn with_strategies(strategies: Vec<SharedStrategy>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies in the chain.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the first instance any strategy produces for `name`.
    ///
    /// Strategy failures are logged and treated like "nothing found".
    pub async fn resolve(&self, name: &str) -> Option<SharedInstance> {
        for strategy in &self.strategies {
            match strategy.try_resolve(name).await {
                Ok(Some(instance)) => {
                    debug!(plugin = %name, strategy = strategy.name(), "Plugin resolved");
                    return Some(instance);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        plugin = %name,
                        strategy = strategy.name(),
                        error = %e,
                        "Discovery strategy failed"
                    );
                }
            }
        }

        debug!(plugin = %name, "No strategy resolved plugin");
        None
    }
}
