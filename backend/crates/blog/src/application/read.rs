//! Read Use Cases
//!
//! Detail reads count a view; list reads do not.

use std::sync::Arc;

use kernel::id::BlogId;

use crate::domain::entity::{Blog, Comment};
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Default page size for the recent-blogs listing
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// A blog record joined with its comments and like count
pub struct BlogDetail {
    pub blog: Blog,
    pub comments: Vec<Comment>,
    pub likes: i64,
}

/// Read use cases: detail fetch and recent listing
pub struct ReadBlogUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> ReadBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a blog with comments and like count, incrementing its view
    /// counter. The returned record reflects the incremented count.
    pub async fn get(&self, blog_id: &BlogId) -> BlogResult<BlogDetail> {
        let mut blog = self
            .repo
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogError::BlogNotFound)?;

        self.repo.increment_views(blog_id).await?;
        blog.views += 1;

        let comments = self.repo.list_comments(blog_id).await?;
        let likes = self.repo.count_likes(blog_id).await?;

        Ok(BlogDetail {
            blog,
            comments,
            likes,
        })
    }

    /// List recent blogs, newest first
    pub async fn list_recent(&self) -> BlogResult<Vec<Blog>> {
        self.repo.list_recent(DEFAULT_LIST_LIMIT).await
    }

    /// List comments for a blog
    pub async fn comments(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>> {
        // 404 for comments of a missing blog, not an empty list
        if self.repo.find_by_id(blog_id).await?.is_none() {
            return Err(BlogError::BlogNotFound);
        }
        self.repo.list_comments(blog_id).await
    }
}
