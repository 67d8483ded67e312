// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod fetch;
pub mod health;
pub mod http_server;

pub use errors::{ApiError, URL_REQUIRED_MESSAGE};
pub use fetch::{fetch_handler, FetchRequest, FetchResponse};
pub use health::{health_handler, index_handler, HealthResponse};
pub use http_server::{create_app, serve, start_server, AppState};
