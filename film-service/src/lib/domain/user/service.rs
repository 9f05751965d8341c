use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::Role;
use auth::TokenIssuer;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Orchestrates registration and login over the user repository and the
/// auth library primitives.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        // Privilege is never self-assigned at registration.
        let user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
            role: Role::User,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        // Unknown email and wrong password collapse into the same error.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self.password_hasher.verify(password, &user.password_hash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(user.id.0, user.role)?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use auth::SigningKeyStore;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, AuthError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
        }
    }

    fn test_issuer() -> Arc<TokenIssuer> {
        let store = Arc::new(SigningKeyStore::new());
        store.initialize(b"test_secret_key_at_least_32_bytes!");
        Arc::new(TokenIssuer::new(store))
    }

    fn register_command(password: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(
            Username::new("john".to_string()).unwrap(),
            EmailAddress::new("john@example.com".to_string()).unwrap(),
            password.to_string(),
        )
    }

    fn stored_user(password_hash: String) -> User {
        User {
            id: UserId(1),
            username: Username::new("john".to_string()).unwrap(),
            email: EmailAddress::new("john@example.com".to_string()).unwrap(),
            password_hash,
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_forces_user_role() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.password_hash != "s3cr3tPwd"
                    && user.password_hash.starts_with("$argon2")
                    && user.role == Role::User
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                })
            });

        let service = AuthService::new(Arc::new(repository), test_issuer());

        let user = service
            .register(register_command("s3cr3tPwd"))
            .await
            .expect("Registration failed");

        assert_ne!(user.password_hash, "s3cr3tPwd");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(AuthError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = AuthService::new(Arc::new(repository), test_issuer());

        let result = service.register(register_command("s3cr3tPwd")).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let hash = PasswordHasher::new().hash("s3cr3tPwd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "john@example.com")
            .times(1)
            .returning(move |_| Ok(Some(stored_user(hash.clone()))));

        let service = AuthService::new(Arc::new(repository), test_issuer());

        let token = service
            .login("john@example.com", "s3cr3tPwd")
            .await
            .expect("Login failed");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let hash = PasswordHasher::new().hash("s3cr3tPwd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(stored_user(hash.clone()))));

        let service = AuthService::new(Arc::new(repository), test_issuer());

        let result = service.login("john@example.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), test_issuer());

        // Same error as a wrong password: which half failed stays hidden.
        let result = service.login("nobody@example.com", "s3cr3tPwd").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
