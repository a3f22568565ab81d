//! Social Router
//!
//! Every route here requires authentication; the guard is applied to the
//! whole router.

use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use auth::AuthGuard;
use auth::application::config::AuthConfig;
use auth::presentation::middleware::require_auth;

use crate::domain::repository::SocialRepository;
use crate::infra::postgres::PgSocialRepository;
use crate::presentation::handlers::{self, SocialAppState};

/// Create the Social router with PostgreSQL repository
pub fn social_router(repo: PgSocialRepository, config: Arc<AuthConfig>) -> Router {
    social_router_generic(repo, config)
}

/// Create a generic Social router for any repository implementation
pub fn social_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: SocialRepository + Clone + Send + Sync + 'static,
{
    let state = SocialAppState {
        repo: Arc::new(repo),
    };

    let guard = AuthGuard::new(config);

    Router::new()
        .route("/follow/{id}", put(handlers::follow::<R>))
        .route("/follow/{id}", delete(handlers::unfollow::<R>))
        .route("/favourite/{id}", put(handlers::add_favourite::<R>))
        .route("/favourite/{id}", delete(handlers::remove_favourite::<R>))
        .route("/profile", get(handlers::own_profile::<R>))
        .route("/profile/{id}", get(handlers::profile::<R>))
        .layer(axum::middleware::from_fn(move |req, next| {
            require_auth(guard.clone(), req, next)
        }))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use auth::auth_router_generic;
    use auth::domain::User;
    use auth::domain::repository::UserRepository;
    use auth::domain::value_object::{email::Email, user_name::UserName};
    use auth::error::AuthResult;

    use crate::application::test_support::MemorySocialRepository;

    #[derive(Clone, Default)]
    struct MemoryUsers {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl UserRepository for MemoryUsers {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email == *email).cloned())
        }

        async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|u| u.user_name.canonical() == user_name.canonical())
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self.find_by_email(email).await?.is_some())
        }

        async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
            Ok(self.find_by_user_name(user_name).await?.is_some())
        }

        async fn update(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if let Some(slot) = users.iter_mut().find(|u| u.user_id == user.user_id) {
                *slot = user.clone();
            }
            Ok(())
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn bearer_put(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// The full account lifecycle through the composed routers:
    /// register two users, log in (right and wrong password), follow,
    /// then attempt the same follow again.
    #[tokio::test]
    async fn test_register_login_follow_sequence() {
        let config = Arc::new(AuthConfig::development());
        let social_repo = MemorySocialRepository::new();
        let app = Router::new()
            .nest(
                "/auth",
                auth_router_generic(MemoryUsers::default(), config.clone()),
            )
            .nest("/users", social_router_generic(social_repo.clone(), config));

        let mut accounts = Vec::new();
        for (name, email, password) in
            [("alice", "a@x.com", "pw1"), ("bob", "b@x.com", "hunter2")]
        {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/auth/register",
                    json!({"username": name, "email": email, "password": password}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            accounts.push(body_json(response).await);
        }

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/auth/login",
                json!({"email": "a@x.com", "password": "pw1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/auth/login",
                json!({"email": "a@x.com", "password": "not-pw1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // The social store learns about accounts out of band here; in
        // production both services read the same database.
        for account in &accounts {
            social_repo.insert_user(
                account["id"].as_str().unwrap().parse().unwrap(),
                account["username"].as_str().unwrap(),
            );
        }

        let follow_uri = format!("/users/follow/{}", accounts[1]["id"].as_str().unwrap());

        let response = app
            .clone()
            .oneshot(bearer_put(&follow_uri, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(social_repo.follow_count(), 1);

        let response = app.oneshot(bearer_put(&follow_uri, &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(social_repo.follow_count(), 1);
    }
}
