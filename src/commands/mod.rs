//! CLI command definitions and dispatch.

pub mod plugins;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use neuroserve_core::config::AppConfig;

/// NeuroServe: plugin gateway
#[derive(Debug, Parser)]
#[command(name = "neuroserve", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "NEUROSERVE_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Print the plugin catalog
    Plugins(plugins::PluginsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Plugins(args) => plugins::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> anyhow::Result<AppConfig> {
    AppConfig::load(config_path)
        .with_context(|| format!("Failed to load config from '{config_path}'"))
}
