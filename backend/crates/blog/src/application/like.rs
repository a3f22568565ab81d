//! Like Use Case
//!
//! Toggle semantics: liking an already-liked blog removes the like.

use std::sync::Arc;

use kernel::id::{BlogId, UserId};

use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Result of a like toggle
pub struct LikeOutput {
    /// Whether the caller likes the blog after the toggle
    pub liked: bool,
    /// Like count after the toggle
    pub likes: i64,
}

/// Like use case
pub struct LikeUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> LikeUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn toggle(&self, user_id: UserId, blog_id: BlogId) -> BlogResult<LikeOutput> {
        if self.repo.find_by_id(&blog_id).await?.is_none() {
            return Err(BlogError::BlogNotFound);
        }

        let liked = if self.repo.has_liked(&blog_id, &user_id).await? {
            self.repo.unlike(&blog_id, &user_id).await?;
            false
        } else {
            self.repo.like(&blog_id, &user_id).await?;
            true
        };

        let likes = self.repo.count_likes(&blog_id).await?;

        Ok(LikeOutput { liked, likes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create::{CreateBlogInput, CreateBlogUseCase};
    use crate::application::test_support::MemoryBlogRepository;

    #[tokio::test]
    async fn test_like_toggles() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let blog = CreateBlogUseCase::new(repo.clone())
            .execute(
                UserId::new(),
                CreateBlogInput {
                    title: "t".into(),
                    content: "c".into(),
                    image: None,
                },
            )
            .await
            .unwrap();

        let user = UserId::new();
        let use_case = LikeUseCase::new(repo.clone());

        let first = use_case.toggle(user, blog.blog_id).await.unwrap();
        assert!(first.liked);
        assert_eq!(first.likes, 1);

        let second = use_case.toggle(user, blog.blog_id).await.unwrap();
        assert!(!second.liked);
        assert_eq!(second.likes, 0);
    }

    #[tokio::test]
    async fn test_like_missing_blog_not_found() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let result = LikeUseCase::new(repo)
            .toggle(UserId::new(), BlogId::new())
            .await;
        assert!(matches!(result, Err(BlogError::BlogNotFound)));
    }
}
