//! PostgreSQL Repository Implementation

use kernel::id::{BlogId, UserId};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::read_model::{AuthoredBlog, FavouriteEntry, PublicUser};
use crate::domain::repository::SocialRepository;
use crate::error::SocialResult;

/// PostgreSQL-backed social repository
#[derive(Clone)]
pub struct PgSocialRepository {
    pool: PgPool,
}

impl PgSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_public_user(row: &PgRow) -> SocialResult<PublicUser> {
    Ok(PublicUser {
        user_id: UserId::from_uuid(row.try_get("user_id")?),
        user_name: row.try_get("user_name")?,
    })
}

impl SocialRepository for PgSocialRepository {
    async fn user_exists(&self, user_id: &UserId) -> SocialResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_public_user(&self, user_id: &UserId) -> SocialResult<Option<PublicUser>> {
        let row = sqlx::query("SELECT user_id, user_name FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_public_user).transpose()
    }

    async fn blog_exists(&self, blog_id: &BlogId) -> SocialResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blogs WHERE blog_id = $1)")
                .bind(blog_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn follow(&self, follower: &UserId, followee: &UserId) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followee_id, created_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(follower.as_uuid())
        .bind(followee.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn unfollow(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
                .bind(follower.as_uuid())
                .bind(followee.as_uuid())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_following(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(follower.as_uuid())
        .bind(followee.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn followers_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>> {
        let rows = sqlx::query(
            r#"
            SELECT u.user_id, u.user_name
            FROM follows f
            JOIN users u ON u.user_id = f.follower_id
            WHERE f.followee_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_public_user).collect()
    }

    async fn following_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>> {
        let rows = sqlx::query(
            r#"
            SELECT u.user_id, u.user_name
            FROM follows f
            JOIN users u ON u.user_id = f.followee_id
            WHERE f.follower_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_public_user).collect()
    }

    async fn add_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO favourites (user_id, blog_id, created_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(blog_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool> {
        let result = sqlx::query("DELETE FROM favourites WHERE user_id = $1 AND blog_id = $2")
            .bind(user_id.as_uuid())
            .bind(blog_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favourites WHERE user_id = $1 AND blog_id = $2)",
        )
        .bind(user_id.as_uuid())
        .bind(blog_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn favourites_of(&self, user_id: &UserId) -> SocialResult<Vec<FavouriteEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT b.blog_id, b.title, u.user_name AS author_username
            FROM favourites f
            JOIN blogs b ON b.blog_id = f.blog_id
            JOIN users u ON u.user_id = b.author_id
            WHERE f.user_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(FavouriteEntry {
                    blog_id: BlogId::from_uuid(row.try_get("blog_id")?),
                    title: row.try_get("title")?,
                    author_username: row.try_get("author_username")?,
                })
            })
            .collect()
    }

    async fn blogs_of(&self, user_id: &UserId) -> SocialResult<Vec<AuthoredBlog>> {
        let rows = sqlx::query(
            r#"
            SELECT blog_id, title, views, created_at
            FROM blogs
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(AuthoredBlog {
                    blog_id: BlogId::from_uuid(row.try_get("blog_id")?),
                    title: row.try_get("title")?,
                    views: row.try_get("views")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
