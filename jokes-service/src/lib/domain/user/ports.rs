use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// The username is checked for uniqueness before insertion; a concurrent
    /// duplicate that slips past the check is caught by the storage
    /// constraint and reported the same way.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `PasswordHash` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve all registered users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the credential store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Returns
    /// The persisted record, identifier included.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique constraint on username violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// Absence is not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// Absence is not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all user records; order is not significant.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
