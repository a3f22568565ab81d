//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use uuid::Uuid;

use crate::application::profile::Profile;
use crate::domain::read_model::{AuthoredBlog, FavouriteEntry, PublicUser};

/// Simple acknowledgement message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public user fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserResponse {
    pub id: Uuid,
    pub username: String,
}

impl From<&PublicUser> for PublicUserResponse {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            username: user.user_name.clone(),
        }
    }
}

/// A favourited blog with its title and author
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    pub blog_id: Uuid,
    pub title: String,
    pub author_username: String,
}

impl From<&FavouriteEntry> for FavouriteResponse {
    fn from(entry: &FavouriteEntry) -> Self {
        Self {
            blog_id: *entry.blog_id.as_uuid(),
            title: entry.title.clone(),
            author_username: entry.author_username.clone(),
        }
    }
}

/// A blog authored by the profiled user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredBlogResponse {
    pub id: Uuid,
    pub title: String,
    pub views: i64,
    pub created_at: i64,
}

impl From<&AuthoredBlog> for AuthoredBlogResponse {
    fn from(blog: &AuthoredBlog) -> Self {
        Self {
            id: *blog.blog_id.as_uuid(),
            title: blog.title.clone(),
            views: blog.views,
            created_at: blog.created_at.timestamp_millis(),
        }
    }
}

/// Composite profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: PublicUserResponse,
    pub followers: Vec<PublicUserResponse>,
    pub following: Vec<PublicUserResponse>,
    pub favourites: Vec<FavouriteResponse>,
    pub blogs: Vec<AuthoredBlogResponse>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            user: PublicUserResponse::from(&profile.user),
            followers: profile
                .followers
                .iter()
                .map(PublicUserResponse::from)
                .collect(),
            following: profile
                .following
                .iter()
                .map(PublicUserResponse::from)
                .collect(),
            favourites: profile
                .favourites
                .iter()
                .map(FavouriteResponse::from)
                .collect(),
            blogs: profile
                .blogs
                .iter()
                .map(AuthoredBlogResponse::from)
                .collect(),
        }
    }
}
