// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit request extraction and validation

use crate::api::forms::{SubmittedForm, UploadedFile};
use crate::provider::{GenerationRequest, DEFAULT_QUALITY, DEFAULT_SIZE};
use crate::storage::has_allowed_extension;

/// Form fields for POST /edit-image (files are carried separately on the form)
#[derive(Debug, Clone)]
pub struct EditImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
}

impl EditImageRequest {
    pub fn from_form(form: &SubmittedForm) -> Self {
        Self {
            prompt: form.field_or("prompt", "").to_string(),
            size: form.field_or("size", DEFAULT_SIZE).to_string(),
            quality: form.field_or("quality", DEFAULT_QUALITY).to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.generation_request().validate()
    }

    pub fn generation_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            size: self.size.clone(),
            quality: self.quality.clone(),
        }
    }
}

/// Reject uploads whose filename extension is outside {png, jpg, jpeg}
pub fn validate_upload_extensions(images: &[UploadedFile]) -> Result<(), String> {
    for image in images {
        if !has_allowed_extension(&image.file_name) {
            return Err(format!("unsupported image format: {}", image.file_name));
        }
    }
    Ok(())
}
