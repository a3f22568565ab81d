//! PostgreSQL Repository Implementation

use kernel::id::{BlogId, CommentId, UserId};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entity::{Blog, Comment};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_blog(row: &PgRow) -> BlogResult<Blog> {
    Ok(Blog {
        blog_id: BlogId::from_uuid(row.try_get("blog_id")?),
        author_id: UserId::from_uuid(row.try_get("author_id")?),
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        image: row.try_get("image")?,
        views: row.try_get("views")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn row_to_comment(row: &PgRow) -> BlogResult<Comment> {
    Ok(Comment {
        comment_id: CommentId::from_uuid(row.try_get("comment_id")?),
        blog_id: BlogId::from_uuid(row.try_get("blog_id")?),
        user_id: UserId::from_uuid(row.try_get("user_id")?),
        body: row.try_get("body")?,
        created_at: row.try_get("created_at")?,
    })
}

const SELECT_BLOG: &str = "
    SELECT blog_id, author_id, title, content, image, views,
           created_at, updated_at
    FROM blogs
";

impl BlogRepository for PgBlogRepository {
    async fn create(&self, blog: &Blog) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (
                blog_id,
                author_id,
                title,
                content,
                image,
                views,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(blog.author_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.image)
        .bind(blog.views)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>> {
        let row = sqlx::query(&format!("{SELECT_BLOG} WHERE blog_id = $1"))
            .bind(blog_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_blog).transpose()
    }

    async fn update(&self, blog: &Blog) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE blogs SET
                title = $2,
                content = $3,
                image = $4,
                updated_at = $5
            WHERE blog_id = $1
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.image)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<Blog>> {
        let rows = sqlx::query(&format!(
            "{SELECT_BLOG} WHERE author_id = $1 ORDER BY created_at DESC"
        ))
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_blog).collect()
    }

    async fn list_recent(&self, limit: i64) -> BlogResult<Vec<Blog>> {
        let rows = sqlx::query(&format!(
            "{SELECT_BLOG} ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_blog).collect()
    }

    async fn increment_views(&self, blog_id: &BlogId) -> BlogResult<()> {
        sqlx::query("UPDATE blogs SET views = views + 1 WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn add_comment(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blog_comments (comment_id, blog_id, user_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.blog_id.as_uuid())
        .bind(comment.user_id.as_uuid())
        .bind(&comment.body)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_comments(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT comment_id, blog_id, user_id, body, created_at
            FROM blog_comments
            WHERE blog_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(blog_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_comment).collect()
    }

    async fn like(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blog_likes (blog_id, user_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(blog_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn unlike(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<()> {
        sqlx::query("DELETE FROM blog_likes WHERE blog_id = $1 AND user_id = $2")
            .bind(blog_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_likes(&self, blog_id: &BlogId) -> BlogResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_likes WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn has_liked(&self, blog_id: &BlogId, user_id: &UserId) -> BlogResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM blog_likes WHERE blog_id = $1 AND user_id = $2)",
        )
        .bind(blog_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
