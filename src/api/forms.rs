// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart form collection shared by the edit and generate endpoints
//!
//! The frontend submits `FormData` for both endpoints, so text fields arrive
//! as multipart parts even when no file is attached.

use std::collections::HashMap;

use axum::body::Bytes;
use axum_extra::extract::Multipart;

use super::errors::ApiError;

/// One file part named `image` with a non-empty filename
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Everything a client submitted in one multipart request
#[derive(Debug, Default)]
pub struct SubmittedForm {
    pub images: Vec<UploadedFile>,
    /// `image` parts seen, including ones with an empty filename
    pub image_parts: usize,
    fields: HashMap<String, String>,
}

impl SubmittedForm {
    /// Drain a multipart stream into memory
    pub async fn collect(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = SubmittedForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("malformed multipart form: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            if name == "image" {
                if let Some(file_name) = file_name {
                    form.image_parts += 1;
                    if file_name.is_empty() {
                        continue;
                    }
                    let data = field.bytes().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read uploaded file: {}", e))
                    })?;
                    form.images.push(UploadedFile { file_name, data });
                }
            } else if !name.is_empty() {
                let value = field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("failed to read form field: {}", e))
                })?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Field value with the original form defaults applied
    pub fn field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.field(name).unwrap_or(default)
    }
}
