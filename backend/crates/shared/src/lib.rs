//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary every service crate speaks: the unified error type
//! with its HTTP mapping, and typed ID wrappers for users, blogs and
//! comments. Nothing here knows about any one service; only meanings
//! that hold across all of them belong in this crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
