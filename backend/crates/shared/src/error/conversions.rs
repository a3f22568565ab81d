//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind as Io;
        let kind = match err.kind() {
            Io::NotFound => ErrorKind::NotFound,
            Io::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::bad_request("Invalid UTF-8 string").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::bad_request("Invalid UUID").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let app_err = if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {err}"))
        } else {
            AppError::internal("JSON serialization error")
        };
        app_err.with_source(err)
    }
}

/// Maps a PostgreSQL SQLSTATE to an error classification.
///
/// See <https://www.postgresql.org/docs/current/errcodes-appendix.html>.
/// Unique-key violations become 409 so a race that slips past an
/// application-level existence check still surfaces as a conflict.
#[cfg(feature = "sqlx")]
fn classify_sqlstate(code: &str) -> AppError {
    match code {
        "23505" => AppError::conflict("Duplicate key value"),
        "23503" => AppError::conflict("Foreign key violation"),
        "23000" => AppError::conflict("Integrity constraint violation"),
        "23502" => AppError::bad_request("Required field is null"),
        "23514" => AppError::bad_request("Check constraint violation"),
        "42501" => AppError::forbidden("Insufficient privilege"),
        c if c.starts_with("53") => {
            AppError::service_unavailable("Database resource exhausted")
        }
        c if c.starts_with("57") => AppError::service_unavailable("Database unavailable"),
        _ => AppError::internal("Database error"),
    }
}

/// Classify a sqlx error without consuming it.
///
/// Service error types route their `Database` variants through this so
/// a unique-key violation that slips past an application-level
/// existence check (register/follow races) still surfaces as 409, not
/// 500.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> AppError {
    match err {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::PoolTimedOut => {
            AppError::service_unavailable("Database connection pool exhausted")
        }
        sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => classify_sqlstate(code.as_ref()),
            None => AppError::internal("Database error"),
        },
        _ => AppError::internal("Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        classify_sqlx_error(&err).with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
