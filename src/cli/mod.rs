// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::ServerConfig;
use crate::proxy::FetchConfig;

/// Fale proxy server
#[derive(Parser, Debug, Default)]
#[command(name = "fale-proxy")]
#[command(version)]
#[command(about = "Fetch web pages and rewrite Yale to Fale in their text", long_about = None)]
pub struct Cli {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long, short)]
    pub port: Option<u16>,
}

impl Cli {
    /// Resolve the listener config: defaults, then env, then flags
    pub fn server_config(&self) -> Result<ServerConfig, String> {
        let config = ServerConfig::from_env().with_overrides(self.host.clone(), self.port);
        config.validate()?;
        Ok(config)
    }

    /// Resolve the outbound fetch config from env
    pub fn fetch_config(&self) -> Result<FetchConfig, String> {
        let config = FetchConfig::from_env();
        config.validate()?;
        Ok(config)
    }
}
