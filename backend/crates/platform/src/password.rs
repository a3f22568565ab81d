//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - Zeroization of sensitive data
//! - Constant-time verification
//! - Optional application-wide pepper

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Password bytes with the optional pepper appended.
fn with_pepper(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = password.to_vec();
    if let Some(p) = pepper {
        bytes.extend_from_slice(p);
    }
    bytes
}

/// Clear text password with automatic memory zeroization
///
/// The raw password is erased from memory when the value is dropped.
/// Does not implement `Clone`, and Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with policy validation
    ///
    /// Unicode is normalized using NFKC before validation; length is
    /// counted in code points, not bytes. There is no minimum length:
    /// existing accounts carry arbitrarily short passwords.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let len = normalized.chars().count();
        if len > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: len,
            });
        }

        // Control characters other than space/tab/newline are rejected
        let has_forbidden_control = normalized
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, ' ' | '\t' | '\n'));
        if has_forbidden_control {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id, producing a PHC-formatted string.
    ///
    /// `pepper` is an optional application-wide secret appended to the
    /// password before hashing; verification must use the same value.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let bytes = with_pepper(self.as_bytes(), pepper);
        let salt = SaltString::generate(OsRng);
        let phc = Argon2::default()
            .hash_password(&bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
            .to_string();
        Ok(HashedPassword { phc })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Hashed password in PHC string format
///
/// The PHC string carries the algorithm, version, parameters, salt and
/// hash, so verification needs nothing beyond the stored string.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    phc: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { phc })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Verify a password against this hash.
    ///
    /// `pepper` must match the value used when the hash was created.
    /// Argon2 compares digests in constant time internally.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.phc) else {
            return false;
        };
        let bytes = with_pepper(password.as_bytes(), pepper);
        Argon2::default().verify_password(&bytes, &parsed).is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("phc", &"[HASH]")
            .finish()
    }
}

/// Burn a hashing round without a real hash to compare against.
///
/// Login runs this when the email resolves to no user, so the rejected
/// path costs the same whether or not the account exists.
pub fn dummy_verify(password: &ClearTextPassword) {
    // A fixed, well-formed PHC string; the comparison always fails.
    const DUMMY_PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
        c29tZXNhbHRzb21lc2FsdA$LPtEEdUZYo+/+sK0UvZ06JJzmLvVRid7kU7BSGLbHLM";

    if let Ok(parsed) = PasswordHash::new(DUMMY_PHC) {
        let _ = Argon2::default().verify_password(password.as_bytes(), &parsed);
    }
}
