// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outbound page fetching
//!
//! One GET per call, no retries and no timeout beyond the transport default.

use reqwest::{redirect::Policy, Client};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::FetchConfig;

/// Errors produced while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target does not parse as an absolute URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Absolute URL, but not something we fetch over HTTP
    #[error("Unsupported URL scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// Connection, DNS, TLS or redirect failure
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    /// Remote answered with a non-2xx status
    #[error("Request failed with status code {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// True for input validation failures, false for network/remote failures
    pub fn is_invalid_url(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidUrl { .. } | FetchError::UnsupportedScheme { .. }
        )
    }
}

/// Fetches raw HTML over a shared HTTP client
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Validate that `raw` is an absolute http(s) URL with a host
    pub fn parse_target(raw: &str) -> Result<Url, FetchError> {
        let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(FetchError::InvalidUrl {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(url)
    }

    /// Fetch the body of `raw` as text
    pub async fn fetch(&self, raw: &str) -> Result<String, FetchError> {
        let url = Self::parse_target(raw)?;
        debug!("Fetching page: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(FetchError::Body)?;
        info!("Fetched {} bytes from {} ({})", body.len(), url, status);

        Ok(body)
    }
}
