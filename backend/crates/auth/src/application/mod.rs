//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};

use chrono::Utc;
use kernel::id::UserId;
use platform::token::{self, TokenClaims};

/// Issue a signed session token for a user, valid from now for the
/// configured TTL.
pub(crate) fn issue_token(user_id: &UserId, config: &AuthConfig) -> String {
    let claims = TokenClaims::new(
        *user_id.as_uuid(),
        Utc::now().timestamp_millis(),
        config.token_ttl_ms(),
    );
    token::sign(&claims, &config.token_secret)
}
