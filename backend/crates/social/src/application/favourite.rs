//! Favourite Use Case

use std::sync::Arc;

use kernel::id::{BlogId, UserId};

use crate::domain::repository::SocialRepository;
use crate::error::{SocialError, SocialResult};

/// Favourite / unfavourite use case
pub struct FavouriteUseCase<R>
where
    R: SocialRepository,
{
    repo: Arc<R>,
}

impl<R> FavouriteUseCase<R>
where
    R: SocialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn add(&self, current: UserId, blog_id: BlogId) -> SocialResult<()> {
        if !self.repo.user_exists(&current).await? {
            return Err(SocialError::UserNotFound);
        }
        if !self.repo.blog_exists(&blog_id).await? {
            return Err(SocialError::BlogNotFound);
        }
        if self.repo.is_favourite(&current, &blog_id).await? {
            return Err(SocialError::AlreadyFavourite);
        }

        self.repo.add_favourite(&current, &blog_id).await?;

        Ok(())
    }

    pub async fn remove(&self, current: UserId, blog_id: BlogId) -> SocialResult<()> {
        if !self.repo.blog_exists(&blog_id).await? {
            return Err(SocialError::BlogNotFound);
        }

        if !self.repo.remove_favourite(&current, &blog_id).await? {
            return Err(SocialError::NotFavourite);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemorySocialRepository;

    #[tokio::test]
    async fn test_favourite_missing_blog_not_found() {
        let repo = Arc::new(MemorySocialRepository::new());
        let user = repo.add_user("a");

        let result = FavouriteUseCase::new(repo.clone())
            .add(user, BlogId::new())
            .await;

        assert!(matches!(result, Err(SocialError::BlogNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_favourite_conflict() {
        let repo = Arc::new(MemorySocialRepository::new());
        let author = repo.add_user("author");
        let reader = repo.add_user("reader");
        let blog = repo.add_blog(author, "Post");

        let use_case = FavouriteUseCase::new(repo.clone());
        use_case.add(reader, blog).await.unwrap();

        let result = use_case.add(reader, blog).await;

        assert!(matches!(result, Err(SocialError::AlreadyFavourite)));
        assert_eq!(repo.favourite_count(), 1);
    }

    #[tokio::test]
    async fn test_favourites_listed_once_with_join() {
        let repo = Arc::new(MemorySocialRepository::new());
        let author = repo.add_user("author");
        let reader = repo.add_user("reader");
        let blog = repo.add_blog(author, "Post");

        FavouriteUseCase::new(repo.clone())
            .add(reader, blog)
            .await
            .unwrap();

        let favourites = repo.favourites_of(&reader).await.unwrap();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites[0].title, "Post");
        assert_eq!(favourites[0].author_username, "author");
    }

    #[tokio::test]
    async fn test_remove_favourite() {
        let repo = Arc::new(MemorySocialRepository::new());
        let author = repo.add_user("author");
        let reader = repo.add_user("reader");
        let blog = repo.add_blog(author, "Post");

        let use_case = FavouriteUseCase::new(repo.clone());
        use_case.add(reader, blog).await.unwrap();
        use_case.remove(reader, blog).await.unwrap();

        assert_eq!(repo.favourite_count(), 0);

        let result = use_case.remove(reader, blog).await;
        assert!(matches!(result, Err(SocialError::NotFavourite)));
    }
}
