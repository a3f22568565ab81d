//! Login Use Case
//!
//! Verifies credentials and issues a session token. No store mutation
//! on either path.

use std::sync::Arc;

use platform::password::{self, ClearTextPassword};

use crate::application::config::AuthConfig;
use crate::application::issue_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed email can't match an account; same error as a miss
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.repo.find_by_email(&email).await?;

        let Some(user) = user else {
            // Burn a hash round so an unknown email costs the same as a
            // wrong password
            password::dummy_verify(&password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(&user.user_id, &self.config);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::test_support::MemoryUserRepository;
    use chrono::Utc;
    use platform::token;

    async fn registered_repo() -> (MemoryUserRepository, Arc<AuthConfig>) {
        let repo = MemoryUserRepository::new();
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(Arc::new(repo.clone()), config.clone())
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        (repo, config)
    }

    #[tokio::test]
    async fn test_login_success_token_resolves_same_user() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(Arc::new(repo), config.clone());

        let output = use_case
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();

        let claims = token::verify(
            &output.token,
            &config.token_secret,
            Utc::now().timestamp_millis(),
        )
        .unwrap();
        assert_eq!(claims.uid, *output.user.user_id.as_uuid());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(Arc::new(repo), config);

        let err = use_case
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(Arc::new(repo), config);

        let err = use_case
            .execute(LoginInput {
                email: "nobody@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_email_case_insensitive() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(Arc::new(repo), config);

        let output = use_case
            .execute(LoginInput {
                email: "A@X.COM".to_string(),
                password: "pw1".to_string(),
            })
            .await;

        assert!(output.is_ok());
    }
}
