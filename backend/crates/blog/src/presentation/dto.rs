//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::read::BlogDetail;
use crate::domain::entity::{Blog, Comment};

// ============================================================================
// Requests
// ============================================================================

/// Create blog request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update request. Absent fields keep their stored values; an
/// explicitly empty `image` clears the stored one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub body: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Blog response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub image: String,
    pub views: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: *blog.blog_id.as_uuid(),
            author_id: *blog.author_id.as_uuid(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            image: blog.image.clone(),
            views: blog.views,
            created_at: blog.created_at.timestamp_millis(),
            updated_at: blog.updated_at.timestamp_millis(),
        }
    }
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: i64,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: *comment.comment_id.as_uuid(),
            blog_id: *comment.blog_id.as_uuid(),
            user_id: *comment.user_id.as_uuid(),
            body: comment.body.clone(),
            created_at: comment.created_at.timestamp_millis(),
        }
    }
}

/// Blog detail response: the record plus comments and like count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailResponse {
    #[serde(flatten)]
    pub blog: BlogResponse,
    pub comments: Vec<CommentResponse>,
    pub likes: i64,
}

impl From<&BlogDetail> for BlogDetailResponse {
    fn from(detail: &BlogDetail) -> Self {
        Self {
            blog: BlogResponse::from(&detail.blog),
            comments: detail.comments.iter().map(CommentResponse::from).collect(),
            likes: detail.likes,
        }
    }
}

/// Like toggle response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes: i64,
}
