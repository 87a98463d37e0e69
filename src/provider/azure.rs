// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Azure OpenAI image deployment client (generations + edits)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, info};

use super::{GenerationRequest, ImageProvider, ProviderError};
use crate::config::AzureSettings;

/// Client for a versioned Azure OpenAI image deployment.
///
/// One best-effort call per invocation: no retry, no backoff, no request
/// timeout.
pub struct AzureImageClient {
    client: reqwest::Client,
    endpoint: String,
    deployment: String,
    api_key: String,
    api_version: String,
}

#[derive(Debug, Deserialize)]
struct ImageApiResponse {
    data: Vec<ImageApiData>,
}

#[derive(Debug, Deserialize)]
struct ImageApiData {
    b64_json: Option<String>,
}

impl AzureImageClient {
    pub fn new(settings: &AzureSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().build()?;
        let endpoint = settings.endpoint.trim_end_matches('/').to_string();
        info!(
            "Azure image client configured: endpoint={}, deployment={}, api-version={}",
            endpoint, settings.deployment, settings.api_version
        );

        Ok(Self {
            client,
            endpoint,
            deployment: settings.deployment.clone(),
            api_key: settings.api_key.clone(),
            api_version: settings.api_version.clone(),
        })
    }

    fn generations_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/images/generations?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    fn edits_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/images/edits?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    /// Pull the first base64 payload out of a provider response
    fn first_image_bytes(response: ImageApiResponse) -> Result<Vec<u8>, ProviderError> {
        let b64 = response
            .data
            .into_iter()
            .next()
            .and_then(|entry| entry.b64_json)
            .ok_or(ProviderError::MissingImageData)?;
        Ok(BASE64.decode(b64)?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream { status, body });
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageProvider for AzureImageClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError> {
        let url = self.generations_url();
        debug!("Image generation POST {}", url);

        let body = serde_json::json!({
            "prompt": request.prompt,
            "size": request.size,
            "quality": request.quality,
            "n": 1,
        });

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let api_response: ImageApiResponse = response.json().await?;
        let image_bytes = Self::first_image_bytes(api_response)?;

        tokio::fs::write(output, &image_bytes).await?;
        info!(
            "Generated image saved to {} ({} bytes)",
            output.display(),
            image_bytes.len()
        );
        Ok(())
    }

    async fn edit(
        &self,
        sources: &[PathBuf],
        request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError> {
        let url = self.edits_url();
        debug!("Image edit POST {} ({} source images)", url, sources.len());

        // Each source is read fully into memory up front, so no file handle
        // outlives the call.
        let mut form = multipart::Form::new();
        for source in sources {
            let bytes = tokio::fs::read(source).await?;
            let file_name = source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image.png".to_string());
            let part = multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("image/png")?;
            form = form.part("image[]", part);
        }
        form = form
            .text("prompt", request.prompt.clone())
            .text("size", request.size.clone())
            .text("quality", request.quality.clone());

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let api_response: ImageApiResponse = response.json().await?;
        let image_bytes = Self::first_image_bytes(api_response)?;

        tokio::fs::write(output, &image_bytes).await?;
        info!(
            "Edited image saved to {} ({} bytes)",
            output.display(),
            image_bytes.len()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "azure"
    }
}
