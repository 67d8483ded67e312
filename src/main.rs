// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fale_proxy::{api::start_server, cli::Cli, version, AppState};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before anything reads the environment
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    tracing::info!("Starting {}", version::get_version_string());

    let server_config = cli.server_config().map_err(|e| anyhow!(e))?;
    let fetch_config = cli.fetch_config().map_err(|e| anyhow!(e))?;

    let state = AppState::new(&fetch_config).context("Failed to create HTTP client")?;

    start_server(&server_config, state).await?;

    tracing::info!("Goodbye");
    Ok(())
}
