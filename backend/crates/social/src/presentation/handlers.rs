//! HTTP Handlers

use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;

use auth::AuthUser;
use kernel::id::{BlogId, UserId};

use crate::application::{FavouriteUseCase, FollowUseCase, ProfileUseCase};
use crate::domain::repository::SocialRepository;
use crate::error::SocialResult;
use crate::presentation::dto::{MessageResponse, ProfileResponse};

/// Shared state for social handlers
#[derive(Clone)]
pub struct SocialAppState<R>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Follow
// ============================================================================

/// PUT /api/users/follow/{id}
pub async fn follow<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(target): Path<UserId>,
) -> SocialResult<Json<MessageResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    FollowUseCase::new(state.repo.clone())
        .follow(auth_user.user_id, target)
        .await?;

    Ok(Json(MessageResponse::new("Followed")))
}

/// DELETE /api/users/follow/{id}
pub async fn unfollow<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(target): Path<UserId>,
) -> SocialResult<Json<MessageResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    FollowUseCase::new(state.repo.clone())
        .unfollow(auth_user.user_id, target)
        .await?;

    Ok(Json(MessageResponse::new("Unfollowed")))
}

// ============================================================================
// Favourite
// ============================================================================

/// PUT /api/users/favourite/{id}
pub async fn add_favourite<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(blog_id): Path<BlogId>,
) -> SocialResult<Json<MessageResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    FavouriteUseCase::new(state.repo.clone())
        .add(auth_user.user_id, blog_id)
        .await?;

    Ok(Json(MessageResponse::new("Added to favourites")))
}

/// DELETE /api/users/favourite/{id}
pub async fn remove_favourite<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(blog_id): Path<BlogId>,
) -> SocialResult<Json<MessageResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    FavouriteUseCase::new(state.repo.clone())
        .remove(auth_user.user_id, blog_id)
        .await?;

    Ok(Json(MessageResponse::new("Removed from favourites")))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/users/profile (own profile)
pub async fn own_profile<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
) -> SocialResult<Json<ProfileResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    let profile = ProfileUseCase::new(state.repo.clone())
        .get(auth_user.user_id)
        .await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

/// GET /api/users/profile/{id}
pub async fn profile<R>(
    State(state): State<SocialAppState<R>>,
    Path(user_id): Path<UserId>,
) -> SocialResult<Json<ProfileResponse>>
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    let profile = ProfileUseCase::new(state.repo.clone()).get(user_id).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}
