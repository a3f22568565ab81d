//! Create Blog Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Blog;
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// Create input
pub struct CreateBlogInput {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Create blog use case
pub struct CreateBlogUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> CreateBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, author_id: UserId, input: CreateBlogInput) -> BlogResult<Blog> {
        let blog = Blog::new(author_id, input.title, input.content, input.image)?;

        self.repo.create(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, author_id = %author_id, "Blog created");

        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemoryBlogRepository;
    use crate::error::BlogError;

    #[tokio::test]
    async fn test_create_persists_blog() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let use_case = CreateBlogUseCase::new(repo.clone());

        let blog = use_case
            .execute(
                UserId::new(),
                CreateBlogInput {
                    title: "Hello".into(),
                    content: "World".into(),
                    image: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(repo.blog_count(), 1);
        assert_eq!(blog.image, "");
        assert_eq!(blog.views, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title_without_write() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let use_case = CreateBlogUseCase::new(repo.clone());

        let result = use_case
            .execute(
                UserId::new(),
                CreateBlogInput {
                    title: "".into(),
                    content: "body".into(),
                    image: None,
                },
            )
            .await;

        assert!(matches!(result, Err(BlogError::Validation(_))));
        assert_eq!(repo.blog_count(), 0);
    }
}
