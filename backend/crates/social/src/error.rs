//! Social Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions, kind::ErrorKind};
use thiserror::Error;

/// Social-specific result type alias
pub type SocialResult<T> = Result<T, SocialError>;

/// Social-specific error variants
#[derive(Debug, Error)]
pub enum SocialError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Blog not found
    #[error("Blog not found")]
    BlogNotFound,

    /// A user cannot follow themselves
    #[error("Cannot follow yourself")]
    SelfFollow,

    /// Follow edge already exists
    #[error("Already following this user")]
    AlreadyFollowing,

    /// Follow edge does not exist
    #[error("Not following this user")]
    NotFollowing,

    /// Favourite already recorded
    #[error("Blog already in favourites")]
    AlreadyFavourite,

    /// Favourite does not exist
    #[error("Blog not in favourites")]
    NotFavourite,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SocialError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SocialError::UserNotFound
            | SocialError::BlogNotFound
            | SocialError::NotFollowing
            | SocialError::NotFavourite => ErrorKind::NotFound,
            SocialError::SelfFollow => ErrorKind::BadRequest,
            SocialError::AlreadyFollowing | SocialError::AlreadyFavourite => ErrorKind::Conflict,
            SocialError::Database(e) => conversions::classify_sqlx_error(e).kind(),
            SocialError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError.
    ///
    /// Database errors go through the kernel classifier, so a
    /// unique-key race past the existence probes surfaces as 409.
    pub fn to_app_error(&self) -> AppError {
        match self {
            SocialError::Database(e) => conversions::classify_sqlx_error(e),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            SocialError::Database(e) => {
                tracing::error!(error = %e, "Social database error");
            }
            SocialError::Internal(msg) => {
                tracing::error!(message = %msg, "Social internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Social error");
            }
        }
    }
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
