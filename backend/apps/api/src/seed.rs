//! Demo Data Seeding
//!
//! Explicit bootstrap invoked with `cargo run -- seed`. Inserts a small
//! set of demo users, blogs, and social edges through the same use cases
//! the HTTP surface runs, so seeded data obeys every domain rule. Never
//! runs as part of normal startup.

use std::sync::Arc;

use auth::application::{RegisterInput, RegisterUseCase};
use auth::{AuthConfig, AuthError, PgUserRepository};
use blog::application::{CreateBlogInput, CreateBlogUseCase};
use blog::PgBlogRepository;
use kernel::id::UserId;
use social::application::{FavouriteUseCase, FollowUseCase};
use social::PgSocialRepository;
use sqlx::PgPool;

const DEMO_PASSWORD: &str = "demo-password";

pub async fn run(pool: &PgPool, config: &Arc<AuthConfig>) -> anyhow::Result<()> {
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let blog_repo = Arc::new(PgBlogRepository::new(pool.clone()));
    let social_repo = Arc::new(PgSocialRepository::new(pool.clone()));

    let register = RegisterUseCase::new(user_repo.clone(), config.clone());

    let mut user_ids: Vec<UserId> = Vec::new();
    for (name, email) in [
        ("alice", "alice@example.com"),
        ("bob", "bob@example.com"),
        ("carol", "carol@example.com"),
    ] {
        let output = match register
            .execute(RegisterInput {
                username: name.into(),
                email: email.into(),
                password: DEMO_PASSWORD.into(),
            })
            .await
        {
            Ok(output) => output,
            Err(AuthError::EmailTaken | AuthError::UserNameTaken) => {
                tracing::info!("Demo data already present, nothing to do");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user = name, "Seeded user");
        user_ids.push(output.user.user_id);
    }

    let create_blog = CreateBlogUseCase::new(blog_repo);

    let alice_blog = create_blog
        .execute(
            user_ids[0],
            CreateBlogInput {
                title: "Hello from alice".into(),
                content: "This is the first seeded post.".into(),
                image: None,
            },
        )
        .await?;

    let bob_blog = create_blog
        .execute(
            user_ids[1],
            CreateBlogInput {
                title: "Bob's corner".into(),
                content: "Notes on everything and nothing.".into(),
                image: None,
            },
        )
        .await?;

    let follow = FollowUseCase::new(social_repo.clone());
    follow.follow(user_ids[1], user_ids[0]).await?;
    follow.follow(user_ids[2], user_ids[0]).await?;
    follow.follow(user_ids[0], user_ids[1]).await?;

    let favourite = FavouriteUseCase::new(social_repo);
    favourite.add(user_ids[2], alice_blog.blog_id).await?;
    favourite.add(user_ids[0], bob_blog.blog_id).await?;

    tracing::info!("Seeding complete");

    Ok(())
}
