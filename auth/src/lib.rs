//! Authentication utilities library
//!
//! Provides the credential-handling infrastructure for the jokes service:
//! - Password hashing (Argon2id)
//! - Signed bearer token issue and validation
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these implementations,
//! so nothing in here knows about HTTP or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("user123", "alice", 24);
//! let token = auth.authenticate("password123", &hash, claims).unwrap();
//!
//! // Validate token on a later request
//! let decoded = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenSigner;
