use async_trait::async_trait;
use auth::Role;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, AuthError> {
    let role: String = row
        .try_get("role")
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;
    Ok(User {
        id: UserId(
            row.try_get("id")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        ),
        username: Username::new(
            row.try_get("username")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        )?,
        email: EmailAddress::new(
            row.try_get("email")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        )?,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        role: role
            .parse::<Role>()
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_username_key") {
                        return AuthError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("users_email_key") {
                        return AuthError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: UserId(id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.as_ref().map(row_to_user).transpose()
    }
}
