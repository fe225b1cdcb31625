//! Print the plugin catalog.

use clap::Args;

use neuroserve_core::logging::init_logging;

use crate::output::{OutputFormat, render_catalog};

/// Arguments for the plugins command
#[derive(Debug, Args)]
pub struct PluginsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Execute the plugins command
pub async fn execute(args: &PluginsArgs, config_path: &str) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let mut logging = config.logging.clone();
    logging.level = "warn".to_string();
    init_logging(&logging);

    let state = neuroserve_api::build_state(config);
    let descriptors = state.plugins.list().await;

    println!("{}", render_catalog(&descriptors, args.format)?);
    Ok(())
}
