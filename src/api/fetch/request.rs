// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Absolute http(s) URL of the page to proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FetchRequest {
    /// Decode a request body the way a JSON body parser would.
    ///
    /// A body that is empty or not declared as JSON carries no fields, so it
    /// decodes to a request without `url`. A declared JSON body that does not
    /// parse is rejected.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, ApiError> {
        if !is_json_content_type(content_type) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to parse the request body as JSON: {}", e))
        })
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Return the target URL, treating an absent or blank value as missing.
    ///
    /// Syntax is checked later by the fetcher so that a malformed URL is
    /// reported as a fetch failure rather than a missing field.
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ApiError::UrlRequired),
        }
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(mime) = content_type.and_then(|ct| ct.split(';').next()) else {
        return false;
    };
    let mime = mime.trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
