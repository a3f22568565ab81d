//! Social Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Read models and repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Follow / unfollow between users (single-row directed edges; both
//!   directions of the relationship derive from the one row)
//! - Favourite / unfavourite blogs
//! - Composite profile read: public user fields, followers, following,
//!   favourites, and authored blogs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::SocialRepository;
pub use error::{SocialError, SocialResult};
pub use infra::postgres::PgSocialRepository;
pub use presentation::router::social_router;
