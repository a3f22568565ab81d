//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Password hashing (Argon2id)
//! - Stateless signed session tokens
//! - Cookie management
//! - Uploaded-file storage

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
pub mod upload;
