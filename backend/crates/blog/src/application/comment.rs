//! Comment Use Case

use std::sync::Arc;

use kernel::id::{BlogId, UserId};

use crate::domain::entity::Comment;
use crate::domain::repository::BlogRepository;
use crate::error::{BlogError, BlogResult};

/// Comment input
pub struct CommentInput {
    pub blog_id: BlogId,
    pub body: String,
}

/// Comment use case
pub struct CommentUseCase<R>
where
    R: BlogRepository,
{
    repo: Arc<R>,
}

impl<R> CommentUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, input: CommentInput) -> BlogResult<Comment> {
        if self.repo.find_by_id(&input.blog_id).await?.is_none() {
            return Err(BlogError::BlogNotFound);
        }

        let comment = Comment::new(input.blog_id, user_id, input.body)?;

        self.repo.add_comment(&comment).await?;

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create::{CreateBlogInput, CreateBlogUseCase};
    use crate::application::test_support::MemoryBlogRepository;

    #[tokio::test]
    async fn test_comment_on_missing_blog_not_found() {
        let repo = Arc::new(MemoryBlogRepository::new());

        let result = CommentUseCase::new(repo)
            .execute(
                UserId::new(),
                CommentInput {
                    blog_id: BlogId::new(),
                    body: "nice".into(),
                },
            )
            .await;

        assert!(matches!(result, Err(BlogError::BlogNotFound)));
    }

    #[tokio::test]
    async fn test_comment_recorded() {
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

        let commenter = UserId::new();
        let comment = CommentUseCase::new(repo.clone())
            .execute(
                commenter,
                CommentInput {
                    blog_id: blog.blog_id,
                    body: "first!".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(comment.user_id, commenter);

        let listed = repo.list_comments(&blog.blog_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].body, "first!");
    }
}
