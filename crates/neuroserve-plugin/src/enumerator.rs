//! Inventory enumeration for catalog endpoints.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::descriptor::PluginDescriptor;
use crate::instance::SharedInstance;
use crate::loader::PluginLoader;
use crate::strategy::{CatalogListing, NameListing, RegistryLookup, SharedStrategy};

/// Lists every discoverable plugin instance.
#[derive(Debug, Clone)]
pub struct PluginEnumerator {
    strategies: Vec<SharedStrategy>,
}

impl PluginEnumerator {
    /// The default chain: catalog, registry, then name listing.
    pub fn for_loader(loader: Arc<dyn PluginLoader>) -> Self {
        let strategies: Vec<SharedStrategy> = vec![
            Arc::new(CatalogListing::new(Arc::clone(&loader))),
            Arc::new(RegistryLookup::new(Arc::clone(&loader))),
            Arc::new(NameListing::new(loader)),
        ];
        Self::with_strategies(strategies)
    }

    pub fn with_strategies(strategies: Vec<SharedStrategy>) -> Self {
        Self { strategies }
    }

    /// Returns the first non-empty inventory, de-duplicated by descriptor
    /// name (first occurrence kept). No inventory yields an empty list.
    pub async fn enumerate(&self) -> Vec<SharedInstance> {
        for strategy in &self.strategies {
            match strategy.try_enumerate().await {
                Ok(Some(instances)) if !instances.is_empty() => {
                    debug!(
                        strategy = strategy.name(),
                        count = instances.len(),
                        "Plugin inventory enumerated"
                    );
                    return dedup_by_name(instances);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(strategy = strategy.name(), error = %e, "Enumeration strategy failed");
                }
            }
        }
        Vec::new()
    }
}

fn dedup_by_name(instances: Vec<SharedInstance>) -> Vec<SharedInstance> {
    let mut seen = HashSet::new();
    instances
        .into_iter()
        .filter(|instance| seen.insert(PluginDescriptor::of(instance.as_ref()).name))
        .collect()
}
