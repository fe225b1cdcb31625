//! # neuroserve-plugin
//!
//! Plugin layer for NeuroServe. Provides:
//!
//! - The [`PluginInstance`] trait and [`PluginDescriptor`] projection
//! - Uniform sync/async task handlers with panic capture
//! - [`LazyPlugin`], a proxy that defers its backing implementation
//! - Loader conventions, discovery strategies and the direct-construction
//!   module table
//! - [`PluginResolver`], [`PluginEnumerator`] and [`TaskDispatcher`]
//! - [`PluginManager`], the facade used by the HTTP layer

pub mod descriptor;
pub mod dispatcher;
pub mod enumerator;
pub mod error;
pub mod handler;
pub mod instance;
pub mod lazy;
pub mod loader;
pub mod macros;
pub mod manager;
pub mod modules;
pub mod prelude;
pub mod resolver;
pub mod strategy;

pub use descriptor::PluginDescriptor;
pub use dispatcher::{TaskDispatcher, TaskOutcome};
pub use enumerator::PluginEnumerator;
pub use error::{DispatchError, PluginError, PluginResult, TaskError};
pub use handler::{Payload, TaskHandler, TaskResult};
pub use instance::{PluginInstance, SharedInstance};
pub use lazy::{LazyPlugin, TaskService};
pub use loader::{PluginLoader, Registry};
pub use manager::PluginManager;
pub use modules::ModuleTable;
pub use resolver::PluginResolver;
pub use strategy::{DiscoveryStrategy, SharedStrategy};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
