// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit API endpoint module
//!
//! Provides POST /edit-image for prompt-driven editing of uploaded images.

pub mod handler;
pub mod request;

pub use handler::edit_image_handler;
pub use request::EditImageRequest;
