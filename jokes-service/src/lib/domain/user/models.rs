use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. The password is held only as a one-way
/// hash; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// Assigned once at registration; immutable afterwards.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// The only structural constraint is non-emptiness; uniqueness is enforced
/// against the credential store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert!(matches!(
            Username::new(String::new()),
            Err(UsernameError::Empty)
        ));
    }

    #[test]
    fn test_username_accepts_non_empty() {
        let username = Username::new("ChuckTesta".to_string()).unwrap();
        assert_eq!(username.as_str(), "ChuckTesta");
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_rejects_garbage() {
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
