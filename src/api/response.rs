// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generated-file response shaping shared by both image endpoints

use std::path::Path;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::errors::ApiError;

/// Read a generated PNG into the response body, then remove it from disk.
/// Removal is best-effort; a leftover file only costs disk space.
pub async fn png_file_response(output: &Path) -> Result<Response, ApiError> {
    let bytes = tokio::fs::read(output).await?;

    if let Err(e) = tokio::fs::remove_file(output).await {
        warn!(
            "Failed to remove generated file {}: {}",
            output.display(),
            e
        );
    }

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}
