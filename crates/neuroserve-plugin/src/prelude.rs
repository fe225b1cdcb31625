//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use crate::descriptor::PluginDescriptor;
pub use crate::error::{PluginError, PluginResult, TaskError};
pub use crate::handler::{Payload, TaskHandler, TaskResult};
pub use crate::instance::{PluginInstance, SharedInstance};
pub use crate::lazy::{LazyPlugin, TaskService};

pub use crate::payload;
