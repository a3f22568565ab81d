//! Blog Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::AuthGuard;
use auth::application::config::AuthConfig;
use auth::presentation::middleware::require_auth;

use crate::domain::repository::BlogRepository;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository, config: Arc<AuthConfig>) -> Router {
    blog_router_generic(repo, config)
}

/// Create a generic Blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    let guard = AuthGuard::new(config);

    let protected = Router::new()
        .route("/create", post(handlers::create_blog::<R>))
        .route("/{id}", put(handlers::update_blog::<R>))
        .route("/{id}/comments", post(handlers::add_comment::<R>))
        .route("/{id}/like", put(handlers::toggle_like::<R>))
        .route_layer(axum::middleware::from_fn(move |req, next| {
            require_auth(guard.clone(), req, next)
        }));

    let public = Router::new()
        .route("/", get(handlers::list_blogs::<R>))
        .route("/{id}", get(handlers::get_blog::<R>))
        .route("/{id}/comments", get(handlers::list_comments::<R>));

    public.merge(protected).with_state(state)
}
