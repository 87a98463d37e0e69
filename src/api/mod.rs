// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod edit_image;
pub mod errors;
pub mod forms;
pub mod generate_image;
pub mod http_server;
pub mod response;

pub use edit_image::{edit_image_handler, EditImageRequest};
pub use errors::{ApiError, ErrorResponse};
pub use forms::{SubmittedForm, UploadedFile};
pub use generate_image::{generate_image_handler, GenerateImageRequest};
pub use http_server::{build_provider, create_app, start_server, AppState};
