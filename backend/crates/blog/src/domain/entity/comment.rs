//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, CommentId, UserId};

use crate::error::{BlogError, BlogResult};

/// Maximum comment body length in characters
pub const MAX_BODY_CHARS: usize = 2000;

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub blog_id: BlogId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment after validating the body
    pub fn new(blog_id: BlogId, user_id: UserId, body: String) -> BlogResult<Self> {
        if body.trim().is_empty() {
            return Err(BlogError::Validation("Comment must not be empty".into()));
        }
        if body.chars().count() > MAX_BODY_CHARS {
            return Err(BlogError::Validation(format!(
                "Comment must be at most {MAX_BODY_CHARS} characters"
            )));
        }

        Ok(Self {
            comment_id: CommentId::new(),
            blog_id,
            user_id,
            body,
            created_at: Utc::now(),
        })
    }
}
