//! Discovery strategies.
//!
//! Each strategy adapts exactly one loader convention. Resolution and
//! enumeration walk an ordered list of strategies and take the first one
//! that produces something; `Ok(None)` means "not applicable here".

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::descriptor::PluginDescriptor;
use crate::error::PluginResult;
use crate::instance::{NamedInstance, SharedInstance};
use crate::loader::PluginLoader;
use crate::modules::ModuleTable;

/// One discovery convention.
#[async_trait]
pub trait DiscoveryStrategy: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to produce the instance registered under `name`.
    async fn try_resolve(&self, _name: &str) -> PluginResult<Option<SharedInstance>> {
        Ok(None)
    }

    /// Attempts to produce the full inventory.
    async fn try_enumerate(&self) -> PluginResult<Option<Vec<SharedInstance>>> {
        Ok(None)
    }
}

/// Shared handle to a strategy.
pub type SharedStrategy = Arc<dyn DiscoveryStrategy>;

/// The loader's instance-by-name capability.
#[derive(Debug)]
pub struct InstanceLookup {
    loader: Arc<dyn PluginLoader>,
}

impl InstanceLookup {
    pub fn new(loader: Arc<dyn PluginLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl DiscoveryStrategy for InstanceLookup {
    fn name(&self) -> &'static str {
        "instance_lookup"
    }

    async fn try_resolve(&self, name: &str) -> PluginResult<Option<SharedInstance>> {
        match self.loader.instance(name).await {
            Some(result) => result,
            None => Ok(None),
        }
    }
}

/// The loader's registry container, as a mapping or a sequence.
#[derive(Debug)]
pub struct RegistryLookup {
    loader: Arc<dyn PluginLoader>,
}

impl RegistryLookup {
    pub fn new(loader: Arc<dyn PluginLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl DiscoveryStrategy for RegistryLookup {
    fn name(&self) -> &'static str {
        "registry"
    }

    async fn try_resolve(&self, name: &str) -> PluginResult<Option<SharedInstance>> {
        Ok(self
            .loader
            .registry()
            .await
            .and_then(|registry| registry.lookup(name)))
    }

    async fn try_enumerate(&self) -> PluginResult<Option<Vec<SharedInstance>>> {
        Ok(self.loader.registry().await.map(|r| r.into_instances()))
    }
}

/// The loader's catalog function.
#[derive(Debug)]
pub struct CatalogListing {
    loader: Arc<dyn PluginLoader>,
}

impl CatalogListing {
    pub fn new(loader: Arc<dyn PluginLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl DiscoveryStrategy for CatalogListing {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn try_enumerate(&self) -> PluginResult<Option<Vec<SharedInstance>>> {
        match self.loader.catalog().await {
            Some(result) => result.map(|registry| Some(registry.into_instances())),
            None => Ok(None),
        }
    }
}

/// The loader's name listing combined with its instance lookup.
#[derive(Debug)]
pub struct NameListing {
    loader: Arc<dyn PluginLoader>,
}

impl NameListing {
    pub fn new(loader: Arc<dyn PluginLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl DiscoveryStrategy for NameListing {
    fn name(&self) -> &'static str {
        "name_listing"
    }

    async fn try_enumerate(&self) -> PluginResult<Option<Vec<SharedInstance>>> {
        let names = match self.loader.plugin_names().await {
            Some(result) => result?,
            None => return Ok(None),
        };

        let mut instances = Vec::with_capacity(names.len());
        for name in names {
            match self.loader.instance(&name).await {
                Some(Ok(Some(instance))) => instances.push(instance),
                Some(Ok(None)) => {
                    debug!(plugin = %name, "Listed plugin has no instance");
                }
                Some(Err(e)) => {
                    warn!(plugin = %name, error = %e, "Skipping listed plugin");
                }
                None => return Ok(None),
            }
        }
        Ok(Some(instances))
    }
}

/// Builds the plugin straight from the module table.
///
/// Always produces a fresh instance. Its `load()` hook runs once here and a
/// failure is logged without rejecting the instance.
#[derive(Debug)]
pub struct DirectConstruction {
    modules: ModuleTable,
}

impl DirectConstruction {
    pub fn new(modules: ModuleTable) -> Self {
        Self { modules }
    }
}

#[async_trait]
impl DiscoveryStrategy for DirectConstruction {
    fn name(&self) -> &'static str {
        "direct_construction"
    }

    async fn try_resolve(&self, name: &str) -> PluginResult<Option<SharedInstance>> {
        let instance = match self.modules.construct(name) {
            Some(result) => result?,
            None => return Ok(None),
        };

        if let Err(e) = instance.load().await {
            warn!(plugin = %name, error = %e, "Plugin load failed after construction");
        }

        let unnamed = instance.name().is_none_or(|n| n.is_empty());
        if unnamed {
            debug!(
                plugin = %name,
                type_name = %PluginDescriptor::of(instance.as_ref()).name,
                "Naming constructed plugin after requested name"
            );
            return Ok(Some(Arc::new(NamedInstance::new(name, instance))));
        }
        Ok(Some(instance))
    }
}
