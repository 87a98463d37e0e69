// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit endpoint handler

use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use super::request::{validate_upload_extensions, EditImageRequest};
use crate::api::errors::ApiError;
use crate::api::forms::SubmittedForm;
use crate::api::http_server::AppState;
use crate::api::response::png_file_response;

/// POST /edit-image - Edit one or more uploaded images per a text prompt
///
/// Pipeline:
/// 1. Collect multipart parts (image files + prompt/size/quality fields)
/// 2. Validate presence of files and prompt, extensions, size/quality values
/// 3. Save every upload into a request-scoped directory under randomized names
/// 4. Dispatch to the configured provider
/// 5. Return the PNG bytes; uploads are deleted when the scope drops
pub async fn edit_image_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = SubmittedForm::collect(multipart).await?;
    debug!(
        "Edit image request: {} file(s), prompt_len={}",
        form.images.len(),
        form.field_or("prompt", "").len()
    );

    if form.images.is_empty() {
        let message = if form.image_parts == 0 {
            "no image file attached"
        } else {
            "no selected files"
        };
        warn!("Edit image validation failed: {}", message);
        return Err(ApiError::InvalidRequest(message.to_string()));
    }

    let request = EditImageRequest::from_form(&form);
    if let Err(e) = request.validate() {
        warn!("Edit image validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }
    if let Err(e) = validate_upload_extensions(&form.images) {
        warn!("Edit image validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    // Uploads live only as long as this scope.
    let scope = state.dirs.upload_scope()?;
    let mut sources = Vec::with_capacity(form.images.len());
    for image in &form.images {
        sources.push(scope.save(&image.file_name, &image.data).await?);
    }

    let generation = request.generation_request().normalized();
    let output = state.dirs.generated_path();

    state
        .provider
        .edit(&sources, &generation, &output)
        .await
        .map_err(|e| {
            warn!("Image edit failed: {}", e);
            ApiError::from(e)
        })?;

    info!(
        "Image edited: provider={}, sources={}, size={}, quality={}",
        state.provider.name(),
        sources.len(),
        generation.size,
        generation.quality
    );

    png_file_response(&output).await
}
