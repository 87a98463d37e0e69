// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Working directories for uploaded and generated images
//!
//! Uploads live in a per-request temporary directory that is deleted when the
//! request scope drops; generated files get a random name under the generated
//! root and are removed by the handler once the response body has been read.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use uuid::Uuid;

/// Upload extensions the edit endpoint accepts
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check whether a client-supplied filename carries an allowed extension
pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Strip path components and anything outside `[A-Za-z0-9._-]` from a
/// client-supplied filename
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Root directories the gateway writes under
pub struct WorkDirs {
    upload_root: PathBuf,
    generated_root: PathBuf,
}

impl WorkDirs {
    /// Create both roots if they do not exist yet
    pub fn create(upload_root: &Path, generated_root: &Path) -> io::Result<Self> {
        std::fs::create_dir_all(upload_root)?;
        std::fs::create_dir_all(generated_root)?;
        Ok(Self {
            upload_root: upload_root.to_path_buf(),
            generated_root: generated_root.to_path_buf(),
        })
    }

    /// Open a fresh per-request upload directory
    pub fn upload_scope(&self) -> io::Result<UploadScope> {
        let dir = TempDir::new_in(&self.upload_root)?;
        Ok(UploadScope { dir })
    }

    /// Randomized output path for one generated image
    pub fn generated_path(&self) -> PathBuf {
        self.generated_root
            .join(format!("{}_generated.png", Uuid::new_v4()))
    }
}

/// Scoped storage for one request's uploads; the directory and every file in
/// it are deleted when this drops.
pub struct UploadScope {
    dir: TempDir,
}

impl UploadScope {
    /// Persist one uploaded file under a randomized, sanitized name
    pub async fn save(&self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        let unique_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(file_name));
        let path = self.dir.path().join(unique_name);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
