//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes. The token
//! is verified once here; downstream handlers read the decoded identity
//! from request extensions instead of re-parsing the token.

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGuard {
    pub config: Arc<AuthConfig>,
}

impl AuthGuard {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Authenticated identity stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid session token
///
/// Accepts `Authorization: Bearer <token>` or falls back to the session
/// cookie. Rejects with 401 when neither carries a verifiable token.
pub async fn require_auth(
    guard: AuthGuard,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let headers = req.headers();

    let token = extract_bearer(headers)
        .or_else(|| platform::cookie::extract_cookie(headers, &guard.config.cookie.name));

    let Some(token) = token else {
        return Err(AuthError::MissingToken.into_response());
    };

    let claims = platform::token::verify(
        &token,
        &guard.config.token_secret,
        Utc::now().timestamp_millis(),
    )
    .map_err(|e| AuthError::from(e).into_response())?;

    req.extensions_mut().insert(AuthUser {
        user_id: UserId::from_uuid(claims.uid),
    });

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &axum::http::HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
