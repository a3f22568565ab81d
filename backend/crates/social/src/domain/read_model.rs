//! Read Models
//!
//! Projections over the shared tables used by the composite profile
//! read. The social crate owns no entities of its own; follow and
//! favourite edges are plain rows addressed by their endpoints.

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, UserId};

/// Public user fields, as seen by other users
#[derive(Debug, Clone)]
pub struct PublicUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// A favourited blog joined with its title and author
#[derive(Debug, Clone)]
pub struct FavouriteEntry {
    pub blog_id: BlogId,
    pub title: String,
    pub author_username: String,
}

/// A blog authored by the profiled user
#[derive(Debug, Clone)]
pub struct AuthoredBlog {
    pub blog_id: BlogId,
    pub title: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}
