//! Stateless Signed Session Tokens
//!
//! A session token proves a user's identity without any server-side
//! lookup: the payload carries the user id and an expiry timestamp, and
//! an HMAC-SHA256 signature binds it to the server-held secret.
//!
//! Wire format: `base64url(payload_json) "." base64url(signature)`.
//!
//! There is no refresh and no revocation list; expiry is the only path
//! by which a token stops being valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Authenticated user id
    pub uid: Uuid,
    /// Expiry, Unix milliseconds
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(uid: Uuid, issued_at_ms: i64, ttl_ms: i64) -> Self {
        Self {
            uid,
            exp: issued_at_ms + ttl_ms,
        }
    }

    /// Check expiry against a caller-supplied clock
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.exp
    }
}

/// Token verification failures. All of them map to 401 at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Invalid token signature")]
    BadSignature,
    #[error("Token has expired")]
    Expired,
}

/// Sign claims into the wire format.
pub fn sign(claims: &TokenClaims, secret: &[u8; 32]) -> String {
    // Serializing a plain struct of Uuid + i64 cannot fail
    let payload = serde_json::to_vec(claims).unwrap_or_default();
    let signature = hmac_sha256(secret, &payload);

    format!(
        "{}.{}",
        to_base64_url(&payload),
        to_base64_url(&signature)
    )
}

/// Verify a token's signature and expiry, returning the claims.
///
/// The signature is checked before the payload is trusted, and the
/// comparison is constant-time.
pub fn verify(token: &str, secret: &[u8; 32], now_ms: i64) -> Result<TokenClaims, TokenError> {
    let (payload_b64, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let payload = from_base64_url(payload_b64).map_err(|_| TokenError::Malformed)?;
    let signature = from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;

    let expected = hmac_sha256(secret, &payload);
    if !constant_time_eq(&signature, &expected) {
        return Err(TokenError::BadSignature);
    }

    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if claims.is_expired(now_ms) {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
