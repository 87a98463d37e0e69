// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use super::request::GenerateImageRequest;
use crate::api::errors::ApiError;
use crate::api::forms::SubmittedForm;
use crate::api::http_server::AppState;
use crate::api::response::png_file_response;

/// POST /generate-image - Generate an image from a text prompt
///
/// Pipeline:
/// 1. Collect form fields (prompt, size, quality)
/// 2. Validate against the allowed value sets
/// 3. Normalize "auto" size/quality to the fixed defaults
/// 4. Dispatch to the configured provider
/// 5. Return the PNG bytes, removing the on-disk copy
pub async fn generate_image_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = SubmittedForm::collect(multipart).await?;
    let request = GenerateImageRequest::from_form(&form);
    debug!(
        "Generate image request: prompt_len={}, size={}, quality={}",
        request.prompt.len(),
        request.size,
        request.quality
    );

    if let Err(e) = request.validate() {
        warn!("Generate image validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    let generation = request.generation_request().normalized();
    let output = state.dirs.generated_path();

    state
        .provider
        .generate(&generation, &output)
        .await
        .map_err(|e| {
            warn!("Image generation failed: {}", e);
            ApiError::from(e)
        })?;

    info!(
        "Image generated: provider={}, size={}, quality={}",
        state.provider.name(),
        generation.size,
        generation.quality
    );

    png_file_response(&output).await
}
