//! Application Layer
//!
//! Use cases and application services.

pub mod favourite;
pub mod follow;
pub mod profile;

// Re-exports
pub use favourite::FavouriteUseCase;
pub use follow::FollowUseCase;
pub use profile::{Profile, ProfileUseCase};

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory repository for use-case tests.

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use kernel::id::{BlogId, UserId};

    use crate::domain::read_model::{AuthoredBlog, FavouriteEntry, PublicUser};
    use crate::domain::repository::SocialRepository;
    use crate::error::SocialResult;

    #[derive(Default)]
    struct Inner {
        users: HashMap<UserId, String>,
        // blog -> (author, title)
        blogs: HashMap<BlogId, (UserId, String)>,
        follows: Vec<(UserId, UserId)>,
        favourites: Vec<(UserId, BlogId)>,
    }

    #[derive(Clone, Default)]
    pub struct MemorySocialRepository {
        inner: Arc<Mutex<Inner>>,
    }

    impl MemorySocialRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_user(&self, name: &str) -> UserId {
            let id = UserId::new();
            self.insert_user(id, name);
            id
        }

        /// Record a user under an externally assigned id (accounts
        /// created through the auth service).
        pub fn insert_user(&self, id: UserId, name: &str) {
            self.inner.lock().unwrap().users.insert(id, name.into());
        }

        pub fn add_blog(&self, author: UserId, title: &str) -> BlogId {
            let id = BlogId::new();
            self.inner
                .lock()
                .unwrap()
                .blogs
                .insert(id, (author, title.into()));
            id
        }

        pub fn follow_count(&self) -> usize {
            self.inner.lock().unwrap().follows.len()
        }

        pub fn favourite_count(&self) -> usize {
            self.inner.lock().unwrap().favourites.len()
        }
    }

    impl SocialRepository for MemorySocialRepository {
        async fn user_exists(&self, user_id: &UserId) -> SocialResult<bool> {
            Ok(self.inner.lock().unwrap().users.contains_key(user_id))
        }

        async fn find_public_user(&self, user_id: &UserId) -> SocialResult<Option<PublicUser>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .users
                .get(user_id)
                .map(|name| PublicUser {
                    user_id: *user_id,
                    user_name: name.clone(),
                }))
        }

        async fn blog_exists(&self, blog_id: &BlogId) -> SocialResult<bool> {
            Ok(self.inner.lock().unwrap().blogs.contains_key(blog_id))
        }

        async fn follow(&self, follower: &UserId, followee: &UserId) -> SocialResult<()> {
            self.inner
                .lock()
                .unwrap()
                .follows
                .push((*follower, *followee));
            Ok(())
        }

        async fn unfollow(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.follows.len();
            inner
                .follows
                .retain(|(a, b)| !(a == follower && b == followee));
            Ok(inner.follows.len() < before)
        }

        async fn is_following(&self, follower: &UserId, followee: &UserId) -> SocialResult<bool> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .follows
                .iter()
                .any(|(a, b)| a == follower && b == followee))
        }

        async fn followers_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .follows
                .iter()
                .filter(|(_, b)| b == user_id)
                .filter_map(|(a, _)| {
                    inner.users.get(a).map(|name| PublicUser {
                        user_id: *a,
                        user_name: name.clone(),
                    })
                })
                .collect())
        }

        async fn following_of(&self, user_id: &UserId) -> SocialResult<Vec<PublicUser>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .follows
                .iter()
                .filter(|(a, _)| a == user_id)
                .filter_map(|(_, b)| {
                    inner.users.get(b).map(|name| PublicUser {
                        user_id: *b,
                        user_name: name.clone(),
                    })
                })
                .collect())
        }

        async fn add_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<()> {
            self.inner
                .lock()
                .unwrap()
                .favourites
                .push((*user_id, *blog_id));
            Ok(())
        }

        async fn remove_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.favourites.len();
            inner
                .favourites
                .retain(|(u, b)| !(u == user_id && b == blog_id));
            Ok(inner.favourites.len() < before)
        }

        async fn is_favourite(&self, user_id: &UserId, blog_id: &BlogId) -> SocialResult<bool> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .favourites
                .iter()
                .any(|(u, b)| u == user_id && b == blog_id))
        }

        async fn favourites_of(&self, user_id: &UserId) -> SocialResult<Vec<FavouriteEntry>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .favourites
                .iter()
                .filter(|(u, _)| u == user_id)
                .filter_map(|(_, blog_id)| {
                    inner.blogs.get(blog_id).map(|(author, title)| FavouriteEntry {
                        blog_id: *blog_id,
                        title: title.clone(),
                        author_username: inner
                            .users
                            .get(author)
                            .cloned()
                            .unwrap_or_default(),
                    })
                })
                .collect())
        }

        async fn blogs_of(&self, user_id: &UserId) -> SocialResult<Vec<AuthoredBlog>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .blogs
                .iter()
                .filter(|(_, (author, _))| author == user_id)
                .map(|(blog_id, (_, title))| AuthoredBlog {
                    blog_id: *blog_id,
                    title: title.clone(),
                    views: 0,
                    created_at: Utc::now(),
                })
                .collect())
        }
    }
}
