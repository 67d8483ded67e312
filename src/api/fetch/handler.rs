// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch API endpoint handler

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::{debug, info, warn};

use super::request::FetchRequest;
use super::response::FetchResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::proxy::transform;

/// POST /fetch - Fetch a page and rewrite its visible text
///
/// # Request
/// - `url`: Absolute http(s) URL to fetch (required)
///
/// # Response
/// - `success`: `true`
/// - `content`: Rewritten HTML document
///
/// # Errors
/// - 400 Bad Request: `url` missing (including empty or non-JSON bodies),
///   or a JSON body that does not parse
/// - 500 Internal Server Error: `url` malformed, or the fetch failed
pub async fn fetch_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<FetchResponse>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let request = FetchRequest::from_body(content_type, &body).map_err(|e| {
        warn!("Rejected fetch body: {}", e);
        e
    })?;

    let url = request.validate().map_err(|e| {
        warn!("Fetch validation failed: {}", e);
        e
    })?;
    debug!("Fetch request for {}", url);

    let html = state.fetcher.fetch(url).await.map_err(|e| {
        warn!("Fetch of {} failed: {}", url, e);
        ApiError::from(e)
    })?;

    let content = transform(&html);
    info!(
        "Proxied {} ({} bytes in, {} bytes out)",
        url,
        html.len(),
        content.len()
    );

    Ok(Json(FetchResponse::ok(content)))
}
