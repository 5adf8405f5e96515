use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenSigner;

/// Authentication coordinator combining password verification and token issue.
///
/// The service keeps one of these per process and hands it to both the login
/// flow (verify + issue) and the protected-route guard (validate).
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_signer: TokenSigner,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_signer: TokenSigner::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a signed token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Claims to embed in the issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be checked
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: Claims,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_signer.sign(&claims)?)
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(&self, claims: &Claims) -> Result<String, TokenError> {
        self.token_signer.sign(claims)
    }

    /// Validate a presented token and extract its claims.
    ///
    /// # Errors
    /// * `TokenError` - Signature or expiry check failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_signer.verify(token)
    }
}
