//! Follow Use Case
//!
//! A follow is one directed row keyed by both endpoints. "Followers of
//! B" and "following of A" are two reads over the same row, so the two
//! halves of the relationship can never disagree.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::SocialRepository;
use crate::error::{SocialError, SocialResult};

/// Follow / unfollow use case
pub struct FollowUseCase<R>
where
    R: SocialRepository,
{
    repo: Arc<R>,
}

impl<R> FollowUseCase<R>
where
    R: SocialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn follow(&self, current: UserId, target: UserId) -> SocialResult<()> {
        if current == target {
            return Err(SocialError::SelfFollow);
        }
        if !self.repo.user_exists(&current).await? {
            return Err(SocialError::UserNotFound);
        }
        if !self.repo.user_exists(&target).await? {
            return Err(SocialError::UserNotFound);
        }
        if self.repo.is_following(&current, &target).await? {
            return Err(SocialError::AlreadyFollowing);
        }

        self.repo.follow(&current, &target).await?;

        tracing::info!(follower = %current, followee = %target, "Follow created");

        Ok(())
    }

    pub async fn unfollow(&self, current: UserId, target: UserId) -> SocialResult<()> {
        if !self.repo.user_exists(&target).await? {
            return Err(SocialError::UserNotFound);
        }

        if !self.repo.unfollow(&current, &target).await? {
            return Err(SocialError::NotFollowing);
        }

        Ok(())
    }
}
