// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring: application state, router, and startup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::edit_image::edit_image_handler;
use crate::api::generate_image::generate_image_handler;
use crate::config::{GatewayConfig, ProviderSettings};
use crate::provider::{AzureImageClient, ImageProvider, LocalStubProvider};
use crate::storage::WorkDirs;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ImageProvider>,
    pub dirs: Arc<WorkDirs>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ImageProvider>, dirs: Arc<WorkDirs>) -> Self {
        Self { provider, dirs }
    }
}

/// Build the gateway router; exposed separately so tests can drive it with
/// `tower::ServiceExt::oneshot`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/edit-image", post(edit_image_handler))
        .route("/generate-image", post(generate_image_handler))
        .route("/health", get(health_handler))
        // Upload count/size is intentionally uncapped, matching the original
        // deployment; axum's default 2 MB body limit would silently cap it.
        .layer(DefaultBodyLimit::disable())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Construct the provider selected at startup
pub fn build_provider(settings: &ProviderSettings) -> anyhow::Result<Arc<dyn ImageProvider>> {
    let provider: Arc<dyn ImageProvider> = match settings {
        ProviderSettings::Azure(azure) => Arc::new(AzureImageClient::new(azure)?),
        ProviderSettings::LocalStub => Arc::new(LocalStubProvider),
    };
    Ok(provider)
}

pub async fn start_server(config: GatewayConfig) -> anyhow::Result<()> {
    let provider = build_provider(&config.provider)?;
    info!("Image provider selected: {}", provider.name());

    let dirs = Arc::new(WorkDirs::create(&config.upload_dir, &config.generated_dir)?);
    let state = AppState::new(provider, dirs);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Image gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
