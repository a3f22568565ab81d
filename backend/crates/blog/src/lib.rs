//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Blog creation and author-only partial updates
//! - Reads with view counting, comments, and like counts
//! - Like toggling and commenting for authenticated users

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::blog::{Blog, BlogPatch};
pub use domain::entity::comment::Comment;
pub use domain::repository::BlogRepository;
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;
