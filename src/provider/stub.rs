// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Local stub provider used when no Azure credentials are configured

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::{Rgb, RgbImage};
use tracing::{debug, info};

use super::{GenerationRequest, ImageProvider, ProviderError};

/// Development-mode fallback: fabricates results without network calls.
///
/// Generation produces a fixed solid-color 1024x1024 PNG; editing returns a
/// copy of the first source image.
pub struct LocalStubProvider;

/// Fill color of the placeholder image
const PLACEHOLDER_COLOR: Rgb<u8> = Rgb([73, 109, 137]);
const PLACEHOLDER_WIDTH: u32 = 1024;
const PLACEHOLDER_HEIGHT: u32 = 1024;

#[async_trait]
impl ImageProvider for LocalStubProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError> {
        debug!(
            "Stub generate: prompt_len={}, writing placeholder to {}",
            request.prompt.len(),
            output.display()
        );

        let placeholder = RgbImage::from_pixel(
            PLACEHOLDER_WIDTH,
            PLACEHOLDER_HEIGHT,
            PLACEHOLDER_COLOR,
        );
        placeholder.save(output)?;

        info!("Stub placeholder image saved to {}", output.display());
        Ok(())
    }

    async fn edit(
        &self,
        sources: &[PathBuf],
        _request: &GenerationRequest,
        output: &Path,
    ) -> Result<(), ProviderError> {
        let first = sources
            .first()
            .ok_or(ProviderError::MissingImageData)?;
        debug!(
            "Stub edit: copying {} to {}",
            first.display(),
            output.display()
        );

        tokio::fs::copy(first, output).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "local-stub"
    }
}
