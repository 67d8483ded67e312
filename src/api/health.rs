// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page and health probe

use axum::response::{Html, IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::version;

const INDEX_PAGE: &str = include_str!("../../static/index.html");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: version::VERSION.to_string(),
        }
    }
}

/// GET / - Serve the proxy form; also used as the readiness check
pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
