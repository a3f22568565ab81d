//! Blog Entity

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, UserId};

use crate::error::{BlogError, BlogResult};

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// Blog entity
#[derive(Debug, Clone)]
pub struct Blog {
    /// Internal UUID identifier
    pub blog_id: BlogId,
    /// Author (owner of all mutation rights)
    pub author_id: UserId,
    /// Title
    pub title: String,
    /// Body text
    pub content: String,
    /// Image path, empty string when the blog has no image
    pub image: String,
    /// Read counter, incremented on every detail fetch
    pub views: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog after validating title and content
    pub fn new(
        author_id: UserId,
        title: String,
        content: String,
        image: Option<String>,
    ) -> BlogResult<Self> {
        validate_title(&title)?;
        validate_content(&content)?;

        let now = Utc::now();

        Ok(Self {
            blog_id: BlogId::new(),
            author_id,
            title,
            content,
            image: image.unwrap_or_default(),
            views: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. Only fields present in the patch change;
    /// an explicitly empty image clears the stored one.
    pub fn apply_patch(&mut self, patch: BlogPatch) -> BlogResult<()> {
        if let Some(title) = patch.title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(content) = patch.content {
            validate_content(&content)?;
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        self.updated_at = Utc::now();

        Ok(())
    }
}

/// Partial-update carrier: `None` means "leave as stored"
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

fn validate_title(title: &str) -> BlogResult<()> {
    if title.trim().is_empty() {
        return Err(BlogError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(BlogError::Validation(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> BlogResult<()> {
    if content.trim().is_empty() {
        return Err(BlogError::Validation("Content must not be empty".into()));
    }
    Ok(())
}
