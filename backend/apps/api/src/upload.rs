//! File Upload Handler
//!
//! Multipart endpoint over [`platform::upload::FileStore`]. The first
//! file field is stored; anything else in the request is ignored.

use axum::Json;
use axum::extract::{Multipart, State};
use platform::upload::{FileStore, UploadError};
use serde::Serialize;

use kernel::error::{app_error::AppError, kind::ErrorKind};

/// Upload handler state
#[derive(Clone)]
pub struct UploadState {
    pub store: FileStore,
}

/// Upload response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_path: String,
}

/// POST /api/upload (requires authentication)
pub async fn upload_file(
    State(state): State<UploadState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read upload: {e}")))?;

        let stored = state
            .store
            .save(&bytes, &file_name)
            .await
            .map_err(upload_error_to_app)?;

        return Ok(Json(UploadResponse { file_path: stored }));
    }

    Err(AppError::bad_request("No file field in upload"))
}

fn upload_error_to_app(err: UploadError) -> AppError {
    match err {
        UploadError::RejectedFileType(name) => AppError::new(
            ErrorKind::UnsupportedMediaType,
            format!("File type not allowed: {name}"),
        ),
        UploadError::TooLarge { size, limit } => AppError::new(
            ErrorKind::PayloadTooLarge,
            format!("File too large: {size} bytes (limit {limit})"),
        ),
        UploadError::Io(e) => AppError::internal("Failed to store file").with_source(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_type_maps_to_415() {
        let err = upload_error_to_app(UploadError::RejectedFileType("x.exe".into()));
        assert_eq!(err.status_code(), 415);
    }

    #[test]
    fn test_too_large_maps_to_413() {
        let err = upload_error_to_app(UploadError::TooLarge {
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        });
        assert_eq!(err.status_code(), 413);
    }
}
