use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Username;

pub mod jokes;
pub mod login;
pub mod register;

/// Typed error result for the HTTP surface: a status code plus the fixed
/// message the client sees.
///
/// Error bodies are always flat `{"message": "..."}` — that is the wire
/// contract clients assert against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn missing_credentials() -> Self {
        Self::BadRequest("username and password required".to_string())
    }

    pub fn username_taken() -> Self {
        Self::BadRequest("username taken".to_string())
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("invalid credentials".to_string())
    }

    pub fn token_required() -> Self {
        Self::Unauthorized("token required".to_string())
    }

    pub fn token_invalid() -> Self {
        Self::Unauthorized("token invalid".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(detail) => {
                // The detail stays in the logs; the client gets a generic body.
                tracing::error!(error = %detail, "Request failed with server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists(_) => ApiError::username_taken(),
            UserError::NotFoundByUsername(_) => ApiError::invalid_credentials(),
            UserError::InvalidUsername(_) => ApiError::missing_credentials(),
            UserError::InvalidUserId(_)
            | UserError::NotFound(_)
            | UserError::PasswordHash(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Raw credential payload shared by the register and login routes.
///
/// Both fields are optional so that presence is checked by the flow rather
/// than rejected by the JSON extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    username: Option<String>,
    password: Option<String>,
}

/// Credentials that passed the payload check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: String,
}

impl CredentialsRequest {
    /// Payload check: both fields present and non-empty.
    ///
    /// First step of both the registration and login pipelines; every
    /// failure mode collapses to the same fixed message.
    pub fn try_into_credentials(self) -> Result<Credentials, ApiError> {
        let password = self.password.unwrap_or_default();
        if password.is_empty() {
            return Err(ApiError::missing_credentials());
        }

        let username = Username::new(self.username.unwrap_or_default())
            .map_err(|_| ApiError::missing_credentials())?;

        Ok(Credentials { username, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, password: Option<&str>) -> CredentialsRequest {
        CredentialsRequest {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_payload_check_accepts_complete_credentials() {
        let credentials = request(Some("OldUser"), Some("password"))
            .try_into_credentials()
            .unwrap();
        assert_eq!(credentials.username.as_str(), "OldUser");
        assert_eq!(credentials.password, "password");
    }

    #[test]
    fn test_payload_check_rejects_missing_fields() {
        for payload in [
            request(None, Some("password")),
            request(Some("OldUser"), None),
            request(None, None),
            request(Some(""), Some("password")),
            request(Some("OldUser"), Some("")),
        ] {
            assert_eq!(
                payload.try_into_credentials().unwrap_err(),
                ApiError::missing_credentials()
            );
        }
    }

    #[test]
    fn test_user_error_mapping() {
        assert_eq!(
            ApiError::from(UserError::UsernameAlreadyExists("OldUser".to_string())),
            ApiError::username_taken()
        );
        assert_eq!(
            ApiError::from(UserError::NotFoundByUsername("ChuckTesta".to_string())),
            ApiError::invalid_credentials()
        );
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("connection refused".to_string())),
            ApiError::InternalServerError(_)
        ));
    }
}
