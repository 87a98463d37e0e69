// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-sourced gateway configuration
//!
//! Built once in `main` and passed down; the provider strategy (real Azure
//! deployment vs local stub) is decided here at startup, never per request.

use std::env;
use std::path::PathBuf;

/// Pinned Azure OpenAI images API version
pub const DEFAULT_API_VERSION: &str = "2025-04-01-preview";

/// Placeholder values the original deployment shipped with; treated the same
/// as unset credentials.
const PLACEHOLDER_VALUES: &[&str] = &["your-api-key", "your-endpoint", "your-deployment-name"];

/// Credentials and addressing for a real Azure image deployment
#[derive(Debug, Clone)]
pub struct AzureSettings {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

/// Which image provider the gateway runs against
#[derive(Debug, Clone)]
pub enum ProviderSettings {
    Azure(AzureSettings),
    LocalStub,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub provider: ProviderSettings,
}

fn configured(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && !PLACEHOLDER_VALUES.contains(&v.as_str()))
}

/// Pick the provider strategy from whatever credentials are present.
/// Missing or placeholder credentials select the stub, never an error.
fn select_provider(
    api_key: Option<String>,
    endpoint: Option<String>,
    deployment: Option<String>,
    api_version: Option<String>,
) -> ProviderSettings {
    match (configured(api_key), configured(endpoint), configured(deployment)) {
        (Some(api_key), Some(endpoint), Some(deployment)) => {
            ProviderSettings::Azure(AzureSettings {
                api_key,
                endpoint,
                deployment,
                api_version: api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            })
        }
        _ => ProviderSettings::LocalStub,
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));
        let generated_dir =
            PathBuf::from(env::var("GENERATED_DIR").unwrap_or_else(|_| "generated".to_string()));

        let provider = select_provider(
            env::var("AZURE_API_KEY").ok(),
            env::var("AZURE_ENDPOINT").ok(),
            env::var("AZURE_DEPLOYMENT_NAME").ok(),
            env::var("AZURE_API_VERSION").ok(),
        );

        Self {
            port,
            upload_dir,
            generated_dir,
            provider,
        }
    }
}
