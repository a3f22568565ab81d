//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BlogId, UserId};

use crate::domain::entity::{Blog, Comment};
use crate::error::BlogResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Create a new blog
    async fn create(&self, blog: &Blog) -> BlogResult<()>;

    /// Find blog by ID
    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>>;

    /// Persist the full blog record
    async fn update(&self, blog: &Blog) -> BlogResult<()>;

    /// List blogs by author, newest first
    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<Blog>>;

    /// List recent blogs, newest first
    async fn list_recent(&self, limit: i64) -> BlogResult<Vec<Blog>>;

    /// Increment the view counter
    async fn increment_views(&self, blog_id: &BlogId) -> BlogResult<()>;

    /// Add a comment
    async fn add_comment(&self, comment: &Comment) -> BlogResult<()>;

    /// List comments for a blog, oldest first
    async fn list_comments(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>>;

    /// Record a like
    async fn like(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<()>;

    /// Remove a like
    async fn unlike(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<()>;

    /// Count likes for a blog
    async fn count_likes(&self, blog_id: &BlogId) -> BlogResult<i64>;

    /// Check whether a user has liked a blog
    async fn has_liked(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<bool>;
}
