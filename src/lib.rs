// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod provider;
pub mod storage;
pub mod version;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState, ErrorResponse};
pub use config::{AzureSettings, GatewayConfig, ProviderSettings};
pub use provider::{
    AzureImageClient, GenerationRequest, ImageProvider, LocalStubProvider, ProviderError,
};
pub use storage::WorkDirs;
