//! The loader collaborator.
//!
//! A loader is whatever owns the plugin inventory. Loaders differ in which
//! discovery conventions they expose, so every method is optional: the
//! default returns `None`, meaning "this loader does not offer it". A
//! `Some(Err(..))` means the convention exists but failed this time.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::descriptor::PluginDescriptor;
use crate::error::PluginResult;
use crate::instance::SharedInstance;

/// Registry exposed by a loader.
#[derive(Clone)]
pub enum Registry {
    /// Instances keyed by plugin name.
    Mapping(BTreeMap<String, SharedInstance>),
    /// Instances in registration order, matched by descriptor name.
    Sequence(Vec<SharedInstance>),
}

impl Registry {
    /// Looks up an instance by name.
    ///
    /// For a mapping this is a key lookup. For a sequence the first
    /// instance whose descriptor name equals `name` wins.
    pub fn lookup(&self, name: &str) -> Option<SharedInstance> {
        match self {
            Self::Mapping(map) => map.get(name).cloned(),
            Self::Sequence(items) => items
                .iter()
                .find(|instance| PluginDescriptor::of(instance.as_ref()).name == name)
                .cloned(),
        }
    }

    /// Consumes the registry into its instances.
    pub fn into_instances(self) -> Vec<SharedInstance> {
        match self {
            Self::Mapping(map) => map.into_values().collect(),
            Self::Sequence(items) => items,
        }
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        match self {
            Self::Mapping(map) => map.len(),
            Self::Sequence(items) => items.len(),
        }
    }

    /// Returns whether the registry holds no instances.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(map) => f
                .debug_tuple("Mapping")
                .field(&map.keys().collect::<Vec<_>>())
                .finish(),
            Self::Sequence(items) => f.debug_tuple("Sequence").field(&items.len()).finish(),
        }
    }
}

/// Discovery conventions a loader may offer.
#[async_trait]
pub trait PluginLoader: Send + Sync + fmt::Debug {
    /// One-time initialization, attempted under each conventional name the
    /// loader answers to.
    async fn initialize(&self) -> Option<PluginResult<()>> {
        None
    }

    /// Returns the live instance for a name, `Ok(None)` when unknown.
    async fn instance(&self, _name: &str) -> Option<PluginResult<Option<SharedInstance>>> {
        None
    }

    /// The loader's registry attribute.
    async fn registry(&self) -> Option<Registry> {
        None
    }

    /// A full catalog of loaded plugins.
    async fn catalog(&self) -> Option<PluginResult<Registry>> {
        None
    }

    /// Names of the plugins the loader knows about.
    async fn plugin_names(&self) -> Option<PluginResult<Vec<String>>> {
        None
    }
}
