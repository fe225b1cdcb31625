//! Start the NeuroServe server.

use clap::Args;

use neuroserve_core::logging::init_logging;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    init_logging(&config.logging);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Starting NeuroServe"
    );

    neuroserve_api::run_server(config).await?;
    Ok(())
}
