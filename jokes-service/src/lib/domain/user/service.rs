use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Uniqueness check first; the storage constraint backs it up if a
        // concurrent registration slips between check and insert.
        if let Some(existing) = self.repository.find_by_username(&command.username).await? {
            return Err(UserError::UsernameAlreadyExists(
                existing.username.to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
