//! Castmon - live, color-coded dashboard for a Cast speaker's
//! /setup/eureka_info endpoint.

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use castmon::cli::Cli;
use castmon::config::{Config, FileConfig};
use castmon::runtime;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never corrupt the dashboard.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match FileConfig::load() {
        Ok(file) => file,
        Err(err) => {
            warn!("ignoring config file: {:#}", err);
            None
        }
    };
    let config = Config::resolve(&cli, file);

    if let Some(path) = &cli.dump {
        return runtime::dump(&config, path).await;
    }

    runtime::run(&config).await
}
