//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::AuthUser;
use kernel::id::BlogId;

use crate::application::{
    CommentInput, CommentUseCase, CreateBlogInput, CreateBlogUseCase, LikeUseCase, ReadBlogUseCase,
    UpdateBlogInput, UpdateBlogUseCase,
};
use crate::domain::entity::BlogPatch;
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;
use crate::presentation::dto::{
    BlogDetailResponse, BlogResponse, CommentRequest, CommentResponse, CreateBlogRequest,
    LikeResponse, UpdateBlogRequest,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/blogs/create (requires authentication)
pub async fn create_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(req): Json<CreateBlogRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateBlogUseCase::new(state.repo.clone());

    let blog = use_case
        .execute(
            auth_user.user_id,
            CreateBlogInput {
                title: req.title,
                content: req.content,
                image: req.image,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(&blog))))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/blogs/{id} (requires authentication; author only)
pub async fn update_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(blog_id): Path<BlogId>,
    Json(req): Json<UpdateBlogRequest>,
) -> BlogResult<Json<BlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateBlogUseCase::new(state.repo.clone());

    let blog = use_case
        .execute(
            auth_user.user_id,
            UpdateBlogInput {
                blog_id,
                patch: BlogPatch {
                    title: req.title,
                    content: req.content,
                    image: req.image,
                },
            },
        )
        .await?;

    Ok(Json(BlogResponse::from(&blog)))
}

// ============================================================================
// Reads
// ============================================================================

/// GET /api/blogs/{id}
pub async fn get_blog<R>(
    State(state): State<BlogAppState<R>>,
    Path(blog_id): Path<BlogId>,
) -> BlogResult<Json<BlogDetailResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let detail = ReadBlogUseCase::new(state.repo.clone()).get(&blog_id).await?;

    Ok(Json(BlogDetailResponse::from(&detail)))
}

/// GET /api/blogs
pub async fn list_blogs<R>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<BlogResponse>>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let blogs = ReadBlogUseCase::new(state.repo.clone()).list_recent().await?;

    Ok(Json(blogs.iter().map(BlogResponse::from).collect()))
}

/// GET /api/blogs/{id}/comments
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(blog_id): Path<BlogId>,
) -> BlogResult<Json<Vec<CommentResponse>>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let comments = ReadBlogUseCase::new(state.repo.clone())
        .comments(&blog_id)
        .await?;

    Ok(Json(comments.iter().map(CommentResponse::from).collect()))
}

// ============================================================================
// Comment / Like
// ============================================================================

/// POST /api/blogs/{id}/comments (requires authentication)
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(blog_id): Path<BlogId>,
    Json(req): Json<CommentRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let comment = CommentUseCase::new(state.repo.clone())
        .execute(
            auth_user.user_id,
            CommentInput {
                blog_id,
                body: req.body,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(&comment))))
}

/// PUT /api/blogs/{id}/like (requires authentication; toggles)
pub async fn toggle_like<R>(
    State(state): State<BlogAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(blog_id): Path<BlogId>,
) -> BlogResult<Json<LikeResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let output = LikeUseCase::new(state.repo.clone())
        .toggle(auth_user.user_id, blog_id)
        .await?;

    Ok(Json(LikeResponse {
        liked: output.liked,
        likes: output.likes,
    }))
}
