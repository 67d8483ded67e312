// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{fetch_handler, health_handler, index_handler};
use crate::config::ServerConfig;
use crate::proxy::{FetchConfig, PageFetcher};

/// Shared per-process state; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
}

impl AppState {
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// State with default fetch settings, for tests
    pub fn new_for_test() -> Self {
        Self::new(&FetchConfig::default()).expect("default HTTP client builds")
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Landing page, doubles as readiness check
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/fetch", post(fetch_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Proxy server listening on {}", listener.local_addr()?);

    serve(listener, create_app(state), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received");
    })
    .await?;

    Ok(())
}
