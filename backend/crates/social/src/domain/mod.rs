//! Domain Layer
//!
//! Read models and repository traits.

pub mod read_model;
pub mod repository;

// Re-exports
pub use read_model::{AuthoredBlog, FavouriteEntry, PublicUser};
pub use repository::SocialRepository;
