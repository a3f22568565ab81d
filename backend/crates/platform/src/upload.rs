//! Uploaded-File Storage
//!
//! The file-store contract: `save(bytes, declared_name)` either persists
//! the bytes under a generated unique name and returns the relative path,
//! or rejects the upload by type or size. Only a fixed whitelist of
//! extensions is accepted, images are additionally checked against their
//! magic bytes, and uploads are capped at 5 MB.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Upload size cap: 5 MB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted file extensions
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "pdf"];

/// Upload rejection and storage errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Extension or content not on the whitelist
    #[error("File type not allowed: {0}")]
    RejectedFileType(String),

    /// Upload exceeds [`MAX_UPLOAD_BYTES`]
    #[error("File too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    /// Underlying filesystem failure
    #[error("Failed to store file")]
    Io(#[from] std::io::Error),
}

/// Directory-backed file store
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist uploaded bytes under a generated unique name.
    ///
    /// Returns the stored file name (relative to the store root).
    pub async fn save(&self, bytes: &[u8], declared_name: &str) -> Result<String, UploadError> {
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let ext = extension_of(declared_name)
            .ok_or_else(|| UploadError::RejectedFileType(declared_name.to_string()))?;

        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(UploadError::RejectedFileType(declared_name.to_string()));
        }

        if !matches_magic(&ext, bytes) {
            return Err(UploadError::RejectedFileType(declared_name.to_string()));
        }

        let file_name = format!("{}.{}", Uuid::new_v4(), ext);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&file_name), bytes).await?;

        tracing::debug!(file = %file_name, size = bytes.len(), "Stored uploaded file");

        Ok(file_name)
    }
}

/// Lowercased extension of a declared file name
fn extension_of(name: &str) -> Option<String> {
    let ext = name.rsplit_once('.')?.1;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check the leading bytes against the signature expected for the extension.
fn matches_magic(ext: &str, bytes: &[u8]) -> bool {
    match ext {
        "jpg" | "jpeg" => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
        "png" => bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "gif" => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
        "pdf" => bytes.starts_with(b"%PDF"),
        _ => false,
    }
}
