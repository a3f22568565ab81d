//! User Name Value Object
//!
//! A user name is the public handle shown on profiles and in follower
//! lists. Uniqueness is enforced on the canonical (lowercased) form, so
//! "Alice" and "alice" cannot coexist.
//!
//! Invariants (after NFKC normalization):
//! - 3 to 30 characters
//! - ASCII letters, digits and `_ . - +` only
//! - first and last character alphanumeric or `_`
//! - no consecutive dots, at least one alphanumeric character
//! - not a reserved word

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use kernel::error::app_error::{AppError, AppResult};

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Reserved words that cannot be used as user names.
///
/// Kept short deliberately: routing terms that would collide with the
/// API surface plus the obvious impersonation targets.
const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "moderator",
    "support",
    "api",
    "auth",
    "login",
    "logout",
    "register",
    "me",
    "profile",
    "follow",
    "favourite",
    "upload",
    "users",
    "blogs",
];

/// User name value object
///
/// Keeps both the form the user typed and the canonical lowercase form
/// used for uniqueness checks and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Create a user name with validation.
    ///
    /// `extra_reserved` extends the default reserved-word list (used by
    /// deployments that add their own routes).
    pub fn new(raw: impl Into<String>, extra_reserved: Option<&[&str]>) -> AppResult<Self> {
        let normalized: String = raw.into().nfkc().collect();
        let trimmed = normalized.trim();

        let char_count = trimmed.chars().count();
        if char_count < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at least {} characters",
                USER_NAME_MIN_LENGTH
            )));
        }
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        for ch in trimmed.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(AppError::bad_request(
                    "User name may only contain letters, digits and _ . - +",
                ));
            }
        }

        let first = trimmed.chars().next().unwrap_or(' ');
        let last = trimmed.chars().last().unwrap_or(' ');
        if !(first.is_ascii_alphanumeric() || first == '_')
            || !(last.is_ascii_alphanumeric() || last == '_')
        {
            return Err(AppError::bad_request(
                "User name must start and end with a letter, digit or underscore",
            ));
        }

        if trimmed.contains("..") {
            return Err(AppError::bad_request(
                "User name may not contain consecutive dots",
            ));
        }

        if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "User name must contain at least one letter or digit",
            ));
        }

        let canonical = trimmed.to_ascii_lowercase();

        if DEFAULT_RESERVED_WORDS.contains(&canonical.as_str())
            || extra_reserved.is_some_and(|words| words.contains(&canonical.as_str()))
        {
            return Err(AppError::bad_request("User name is reserved"));
        }

        Ok(Self {
            original: trimmed.to_string(),
            canonical,
        })
    }

    /// Create from database values (assumed already validated)
    pub fn from_db(original: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            canonical: canonical.into(),
        }
    }

    /// The user name as typed
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Canonical lowercase form, used for uniqueness and lookup
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.original
    }
}
