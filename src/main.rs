// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_image_gateway::config::{GatewayConfig, ProviderSettings};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    if !dotenv_loaded {
        warn!("No .env file found, using system environment variables");
    }

    info!(
        "Starting {}",
        fabstir_image_gateway::version::get_version_string()
    );

    let config = GatewayConfig::from_env();
    match &config.provider {
        ProviderSettings::Azure(settings) => info!(
            "Azure credentials found: deployment={}, api-version={}",
            settings.deployment, settings.api_version
        ),
        ProviderSettings::LocalStub => {
            warn!("No Azure credentials configured, running in local stub mode")
        }
    }
    info!(
        "Upload dir: {}, generated dir: {}",
        config.upload_dir.display(),
        config.generated_dir.display()
    );

    fabstir_image_gateway::api::start_server(config).await
}
