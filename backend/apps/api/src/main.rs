//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod seed;
mod upload;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::{AuthConfig, AuthGuard, PgUserRepository, auth_router};
use axum::routing::post;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use blog::{PgBlogRepository, blog_router};
use platform::upload::FileStore;
use social::{PgSocialRepository, social_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,blog=info,social=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let config = Arc::new(load_auth_config()?);

    // Seeding is an explicit subcommand, never part of normal startup
    if env::args().nth(1).as_deref() == Some("seed") {
        seed::run(&pool, &config).await?;
        return Ok(());
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Upload storage
    let upload_root = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    let store = FileStore::new(upload_root);

    let guard = AuthGuard::new(config.clone());
    let upload_route = Router::new()
        .route("/api/upload", post(upload::upload_file))
        .route_layer(axum::middleware::from_fn(move |req, next| {
            auth::middleware::require_auth(guard.clone(), req, next)
        }))
        // Let oversized uploads through to the handler so the size cap
        // is reported as 413 with a body, not a closed connection
        .layer(axum::extract::DefaultBodyLimit::max(
            platform::upload::MAX_UPLOAD_BYTES + 64 * 1024,
        ))
        .with_state(upload::UploadState { store });

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(PgUserRepository::new(pool.clone()), config.clone()),
        )
        .nest(
            "/api/blogs",
            blog_router(PgBlogRepository::new(pool.clone()), config.clone()),
        )
        .nest(
            "/api/users",
            social_router(PgSocialRepository::new(pool.clone()), config.clone()),
        )
        .merge(upload_route)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the auth configuration from the environment.
///
/// `AUTH_TOKEN_SECRET` (base64, 32 bytes) is required outside of debug
/// builds; debug builds fall back to a random per-process secret.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::with_random_secret()
    };

    match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            anyhow::ensure!(
                secret_bytes.len() == 32,
                "AUTH_TOKEN_SECRET must decode to 32 bytes"
            );
            config.token_secret.copy_from_slice(&secret_bytes);
        }
        Err(_) => {
            if !cfg!(debug_assertions) {
                anyhow::bail!("AUTH_TOKEN_SECRET must be set in production");
            }
            tracing::warn!("AUTH_TOKEN_SECRET not set; tokens will not survive a restart");
        }
    }

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}
