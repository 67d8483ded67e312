// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for outbound page fetching

use std::env;

/// Hard ceiling for `FETCH_MAX_REDIRECTS`
pub const MAX_REDIRECT_LIMIT: usize = 20;

/// Configuration for the page fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every outbound request
    pub user_agent: String,
    /// Maximum redirects to follow before giving up (default: 10)
    pub max_redirects: usize,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or(defaults.user_agent),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_redirects),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        if self.max_redirects > MAX_REDIRECT_LIMIT {
            return Err(format!(
                "max_redirects cannot exceed {}",
                MAX_REDIRECT_LIMIT
            ));
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("fale-proxy/{}", crate::version::VERSION_NUMBER),
            max_redirects: 10,
        }
    }
}
