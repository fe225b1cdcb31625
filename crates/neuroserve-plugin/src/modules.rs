//! Module table for direct construction.
//!
//! Maps a plugin name to a constructor, the last resort when no loader
//! convention knows the plugin.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::PluginResult;
use crate::instance::SharedInstance;

type Constructor = dyn Fn() -> PluginResult<SharedInstance> + Send + Sync;

/// Name-to-constructor table.
#[derive(Clone, Default)]
pub struct ModuleTable {
    constructors: BTreeMap<String, Arc<Constructor>>,
}

impl ModuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor, replacing any previous one for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> PluginResult<SharedInstance> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Arc::new(constructor));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> PluginResult<SharedInstance> + Send + Sync + 'static,
    {
        self.register(name, constructor);
        self
    }

    /// Constructs a fresh instance for `name`, if a constructor exists.
    pub fn construct(&self, name: &str) -> Option<PluginResult<SharedInstance>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    /// Returns whether a constructor is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for ModuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleTable")
            .field("modules", &self.names())
            .finish()
    }
}
