//! Plugin descriptors: the serializable projection of an instance.

use serde::{Deserialize, Serialize};

use crate::instance::PluginInstance;

/// Metadata describing one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Identity key used for lookup and routing.
    pub name: String,
    /// Who provides the plugin.
    pub provider: Option<String>,
    /// Declared task names, empty when unknown.
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl PluginDescriptor {
    /// Projects any instance into a descriptor.
    ///
    /// The name falls back to the runtime type name when the instance has
    /// none (or an empty one); undeclared tasks become an empty list.
    pub fn of(instance: &dyn PluginInstance) -> Self {
        let name = instance
            .name()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| instance.type_name().to_string());

        Self {
            name,
            provider: instance.provider(),
            tasks: instance.tasks().unwrap_or_default(),
        }
    }
}
