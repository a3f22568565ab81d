//! Register Use Case
//!
//! Creates a new user account and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::issue_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate identity fields
        let user_name = UserName::new(input.username, None)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Uniqueness checks; no row is written when either fails
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordPolicy(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, email, password_hash);
        self.repo.create(&user).await?;

        let token = issue_token(&user.user_id, &self.config);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemoryUserRepository;
    use chrono::Utc;
    use platform::token;

    fn use_case(repo: &MemoryUserRepository) -> RegisterUseCase<MemoryUserRepository> {
        RegisterUseCase::new(Arc::new(repo.clone()), Arc::new(AuthConfig::development()))
    }

    fn input(username: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user_and_token() {
        let repo = MemoryUserRepository::new();
        let config = Arc::new(AuthConfig::development());
        let use_case = RegisterUseCase::new(Arc::new(repo.clone()), config.clone());

        let output = use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(output.user.user_name.as_str(), "alice");
        assert_eq!(output.user.email.as_str(), "a@x.com");

        // The issued token resolves back to the new user
        let claims = token::verify(
            &output.token,
            &config.token_secret,
            Utc::now().timestamp_millis(),
        )
        .unwrap();
        assert_eq!(claims.uid, *output.user.user_id.as_uuid());

        // Debug output must not leak the stored password hash
        let debug = format!("{output:?}");
        assert!(!debug.contains("argon2id"));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflict_writes_nothing() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("other", "a@x.com", "pw2"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflict() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        // Case-insensitive collision
        let err = use_case
            .execute(input("Alice", "b@x.com", "pw2"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNameTaken));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        let err = use_case
            .execute(input("alice", "not-an-email", "pw1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_password_hash_is_not_plaintext() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        let output = use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        assert!(!output.user.password_hash.as_phc_string().contains("pw1"));
    }
}
