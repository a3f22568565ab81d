//! Update Blog Use Case
//!
//! Author-only partial update. Ownership is checked before any field is
//! touched.

use std::sync::Arc;

use kernel::id::{BlogId, UserId};

use crate::domain::entity::{Blog, BlogPatch};
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Update input
pub struct UpdateBlogInput {
    pub blog_id: BlogId,
    pub patch: BlogPatch,
}

/// Update blog use case
pub struct UpdateBlogUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller_id: UserId, input: UpdateBlogInput) -> BlogResult<Blog> {
        let mut blog = self
            .repo
            .find_by_id(&input.blog_id)
            .await?
            .ok_or(BlogError::BlogNotFound)?;

        if blog.author_id != caller_id {
            return Err(BlogError::NotAuthor);
        }

        blog.apply_patch(input.patch)?;

        self.repo.update(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, "Blog updated");

        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create::{CreateBlogInput, CreateBlogUseCase};
    use crate::application::test_support::MemoryBlogRepository;

    async fn seed_blog(repo: &Arc<MemoryBlogRepository>, author: UserId, image: &str) -> Blog {
        CreateBlogUseCase::new(repo.clone())
            .execute(
                author,
                CreateBlogInput {
                    title: "Original".into(),
                    content: "Body".into(),
                    image: (!image.is_empty()).then(|| image.to_string()),
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_forbidden_for_non_author() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let author = UserId::new();
        let blog = seed_blog(&repo, author, "").await;

        let result = UpdateBlogUseCase::new(repo.clone())
            .execute(
                UserId::new(),
                UpdateBlogInput {
                    blog_id: blog.blog_id,
                    patch: BlogPatch {
                        title: Some("Hijacked".into()),
                        ..Default::default()
                    },
                },
            )
            .await;

        assert!(matches!(result, Err(BlogError::NotAuthor)));

        // Stored record untouched
        let stored = repo.find_by_id(&blog.blog_id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Original");
    }

    #[tokio::test]
    async fn test_update_missing_blog_not_found() {
        let repo = Arc::new(MemoryBlogRepository::new());

        let result = UpdateBlogUseCase::new(repo)
            .execute(
                UserId::new(),
                UpdateBlogInput {
                    blog_id: BlogId::new(),
                    patch: BlogPatch::default(),
                },
            )
            .await;

        assert!(matches!(result, Err(BlogError::BlogNotFound)));
    }

    #[tokio::test]
    async fn test_update_omitted_image_preserved() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let author = UserId::new();
        let blog = seed_blog(&repo, author, "cover.png").await;

        let updated = UpdateBlogUseCase::new(repo.clone())
            .execute(
                author,
                UpdateBlogInput {
                    blog_id: blog.blog_id,
                    patch: BlogPatch {
                        content: Some("New body".into()),
                        ..Default::default()
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content, "New body");
        assert_eq!(updated.image, "cover.png");
    }

    #[tokio::test]
    async fn test_update_empty_image_clears() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let author = UserId::new();
        let blog = seed_blog(&repo, author, "cover.png").await;

        let updated = UpdateBlogUseCase::new(repo.clone())
            .execute(
                author,
                UpdateBlogInput {
                    blog_id: blog.blog_id,
                    patch: BlogPatch {
                        image: Some(String::new()),
                        ..Default::default()
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.image, "");

        let stored = repo.find_by_id(&blog.blog_id).await.unwrap().unwrap();
        assert_eq!(stored.image, "");
    }
}
