//! NeuroServe: plugin gateway exposing task endpoints over HTTP.
//!
//! Entry point: parses the command line and runs the selected command.

use clap::Parser;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
