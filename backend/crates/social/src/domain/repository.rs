//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BlogId, UserId};

use crate::domain::read_model::{AuthoredBlog, FavouriteEntry, PublicUser};
use crate::error::SocialResult;

/// Social repository trait
///
/// Existence probes run against the shared users/blogs tables; edge
/// operations own the follows/favourites tables.
#[trait_variant::make(SocialRepository: Send)]
pub trait LocalSocialRepository {
    /// Check whether a user exists
    async fn user_exists(&self, user_id: &UserId) -> SocialResult<bool>;

    /// Fetch public user fields
    async fn find_public_user(&self, user_id: &UserId) -> SocialResult<Option<PublicUser>>;

    /// Check whether a blog exists
    async fn blog_exists(&self, blog_id: &BlogId) -> SocialResult<bool>;

    /// Insert a follow edge
    async fn follow(&self, follower: &UserId, followee: &UserId) -> SocialResult<()>;

    /// Delete a follow edge; returns whether a row was removed
    async fn unfollow(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool>;

    /// Check whether a follow edge exists
    async fn is_following(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool>;

    /// Users following the given user
    async fn followers_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>>;

    /// Users the given user follows
    async fn following_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>>;

    /// Insert a favourite edge
    async fn add_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<()>;

    /// Delete a favourite edge; returns whether a row was removed
    async fn remove_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool>;

    /// Check whether a favourite edge exists
    async fn is_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool>;

    /// Favourites of a user, joined with blog title and author name
    async fn favourites_of(&self, user_id: &UserId) -> SocialResult<Vec<FavouriteEntry>>;

    /// Blogs authored by a user, newest first
    async fn blogs_of(&self, user_id: &UserId) -> SocialResult<Vec<AuthoredBlog>>;
}
