// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request extraction and validation

use crate::api::forms::SubmittedForm;
use crate::provider::{GenerationRequest, DEFAULT_QUALITY, DEFAULT_SIZE};

/// Form fields for POST /generate-image
#[derive(Debug, Clone)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
}

impl GenerateImageRequest {
    /// Build from submitted form fields, applying the form defaults
    pub fn from_form(form: &SubmittedForm) -> Self {
        Self {
            prompt: form.field_or("prompt", "").to_string(),
            size: form.field_or("size", DEFAULT_SIZE).to_string(),
            quality: form.field_or("quality", DEFAULT_QUALITY).to_string(),
        }
    }

    /// Validate prompt, size, and quality against the allowed value sets
    pub fn validate(&self) -> Result<(), String> {
        self.generation_request().validate()
    }

    /// Provider-level request (still carrying any "auto" values)
    pub fn generation_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            size: self.size.clone(),
            quality: self.quality.clone(),
        }
    }
}
