//! Profile Use Case
//!
//! Read-only composite over the shared tables.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::read_model::{AuthoredBlog, FavouriteEntry, PublicUser};
use crate::domain::repository::SocialRepository;
use crate::error::{SocialError, SocialResult};

/// Composite profile
pub struct Profile {
    pub user: PublicUser,
    pub followers: Vec<PublicUser>,
    pub following: Vec<PublicUser>,
    pub favourites: Vec<FavouriteEntry>,
    pub blogs: Vec<AuthoredBlog>,
}

/// Profile use case
pub struct ProfileUseCase<R>
where
    R: SocialRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: SocialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, user_id: UserId) -> SocialResult<Profile> {
        let user = self
            .repo
            .find_public_user(&user_id)
            .await?
            .ok_or(SocialError::UserNotFound)?;

        let followers = self.repo.followers_of(&user_id).await?;
        let following = self.repo.following_of(&user_id).await?;
        let favourites = self.repo.favourites_of(&user_id).await?;
        let blogs = self.repo.blogs_of(&user_id).await?;

        Ok(Profile {
            user,
            followers,
            following,
            favourites,
            blogs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::favourite::FavouriteUseCase;
    use crate::application::follow::FollowUseCase;
    use crate::application::test_support::MemorySocialRepository;

    #[tokio::test]
    async fn test_profile_missing_user_not_found() {
        let repo = Arc::new(MemorySocialRepository::new());
        let result = ProfileUseCase::new(repo).get(UserId::new()).await;
        assert!(matches!(result, Err(SocialError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_profile_composite() {
        let repo = Arc::new(MemorySocialRepository::new());
        let alice = repo.add_user("alice");
        let bob = repo.add_user("bob");
        let blog = repo.add_blog(bob, "Bob's post");

        FollowUseCase::new(repo.clone())
            .follow(alice, bob)
            .await
            .unwrap();
        FavouriteUseCase::new(repo.clone())
            .add(alice, blog)
            .await
            .unwrap();

        let profile = ProfileUseCase::new(repo.clone()).get(alice).await.unwrap();

        assert_eq!(profile.user.user_name, "alice");
        assert!(profile.followers.is_empty());
        assert_eq!(profile.following.len(), 1);
        assert_eq!(profile.following[0].user_name, "bob");
        assert_eq!(profile.favourites.len(), 1);
        assert_eq!(profile.favourites[0].author_username, "bob");
        assert!(profile.blogs.is_empty());

        // Bob's profile shows the reverse edge and his authored blog
        let bob_profile = ProfileUseCase::new(repo).get(bob).await.unwrap();
        assert_eq!(bob_profile.followers.len(), 1);
        assert_eq!(bob_profile.followers[0].user_name, "alice");
        assert_eq!(bob_profile.blogs.len(), 1);
    }
}
