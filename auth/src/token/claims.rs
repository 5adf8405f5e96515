use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a bearer token.
///
/// The token is stateless: everything needed at presentation time is in
/// here, verified purely by signature and expiry. `exp` is mandatory, so an
/// issued token always has a bounded lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username the token was issued to
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with a fixed expiry window.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username to embed in the token
    /// * `valid_for_hours` - Hours until the token expires
    pub fn for_user(
        user_id: impl ToString,
        username: impl Into<String>,
        valid_for_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(valid_for_hours);

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_sets_expiry_window() {
        let claims = Claims::for_user("user123", "alice", 24);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            username: "alice".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
