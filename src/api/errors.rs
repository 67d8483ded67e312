// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use super::fetch::FetchResponse;
use crate::proxy::FetchError;

/// Message returned when the request carries no `url`
pub const URL_REQUIRED_MESSAGE: &str = "URL is required";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    UrlRequired,
    InvalidRequest(String),
    FetchFailed(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::UrlRequired => URL_REQUIRED_MESSAGE.to_string(),
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::FetchFailed(msg) => format!("Failed to fetch content: {}", msg),
        }
    }

    pub fn to_response(&self) -> FetchResponse {
        FetchResponse::failed(self.message())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::UrlRequired | ApiError::InvalidRequest(_) => 400,
            // Malformed URLs land here too; callers only distinguish "missing"
            ApiError::FetchFailed(_) => 500,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::FetchFailed(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UrlRequired => write!(f, "Invalid request: {}", URL_REQUIRED_MESSAGE),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
