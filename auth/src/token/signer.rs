use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and validates bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Validation checks both the signature and
/// the mandatory `exp` claim; an expired token is reported distinctly so the
/// caller can log the cause, although the wire response is the same.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenSigner {
    /// Create a new token signer with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens; at least 256 bits for HS256.
    ///   Store it in configuration, never in code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a token string.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a presented token and extract its claims.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim is in the past
    /// * `Invalid` - Signature mismatch, malformed token, or missing claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
