// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image provider abstraction: remote Azure OpenAI client or local stub

pub mod azure;
pub mod stub;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

pub use azure::AzureImageClient;
pub use stub::LocalStubProvider;

/// Allowed output sizes for image generation and editing
pub const ALLOWED_SIZES: &[&str] = &["1024x1024", "1536x1024", "1024x1536", "auto"];

/// Allowed quality levels
pub const ALLOWED_QUALITIES: &[&str] = &["low", "medium", "high", "auto"];

/// Defaults applied when the client sends "auto"
pub const DEFAULT_SIZE: &str = "1024x1024";
pub const DEFAULT_QUALITY: &str = "medium";

/// Parameters for one generation or edit call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
}

impl GenerationRequest {
    /// Validate the request fields
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("no prompt provided".to_string());
        }
        if !ALLOWED_SIZES.contains(&self.size.as_str()) {
            return Err(format!(
                "invalid size '{}'; allowed: {}",
                self.size,
                ALLOWED_SIZES.join(", ")
            ));
        }
        if !ALLOWED_QUALITIES.contains(&self.quality.as_str()) {
            return Err(format!(
                "invalid quality '{}'; allowed: {}",
                self.quality,
                ALLOWED_QUALITIES.join(", ")
            ));
        }
        Ok(())
    }

    /// Resolve "auto" size/quality to the fixed defaults before dispatch
    pub fn normalized(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            size: if self.size == "auto" {
                DEFAULT_SIZE.to_string()
            } else {
                self.size.clone()
            },
            quality: if self.quality == "auto" {
                DEFAULT_QUALITY.to_string()
            } else {
                self.quality.clone()
            },
        }
    }
}

/// Failures from an image provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("no image data returned from provider")]
    MissingImageData,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A backend that turns a prompt (and optional source images) into a PNG.
///
/// Selected once at startup: the remote Azure client when credentials are
/// configured, the local stub otherwise.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate an image from a text prompt and write it to `output`
    async fn generate(
        &self,
        request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError>;

    /// Edit one or more source images per the prompt and write the result to `output`
    async fn edit(
        &self,
        sources: &[PathBuf],
        request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError>;

    /// Short provider name for startup logging
    fn name(&self) -> &'static str;
}
