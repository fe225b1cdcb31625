//! `text_tools` plugin definition.

use std::sync::Arc;

use neuroserve_plugin::prelude::*;

use crate::service::{TASK_NORMALIZE, TASK_SPELLCHECK, TextToolsService};

/// Builder for the `text_tools` plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextToolsPlugin;

impl TextToolsPlugin {
    pub const NAME: &'static str = "text_tools";
    pub const PROVIDER: &'static str = "local";

    /// Creates the lazy proxy. The service is constructed on first use.
    pub fn create() -> LazyPlugin {
        LazyPlugin::new(Self::NAME, [TASK_NORMALIZE, TASK_SPELLCHECK], || {
            Ok(Arc::new(TextToolsService::new()) as Arc<dyn TaskService>)
        })
        .with_provider(Self::PROVIDER)
    }
}
