use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::CredentialsRequest;
use crate::domain::user::errors::UserError;
use crate::inbound::http::router::AppState;

/// Login pipeline: payload check, user lookup, password verify, token issue.
///
/// An unknown username and a wrong password produce the identical response,
/// so the route does not reveal which one failed.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let credentials = body.try_into_credentials()?;

    let user = state
        .user_service
        .get_user_by_username(&credentials.username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => ApiError::invalid_credentials(),
            other => ApiError::from(other),
        })?;

    let claims = auth::Claims::for_user(
        user.id,
        user.username.as_str(),
        state.jwt_expiration_hours,
    );

    let token = state
        .authenticator
        .authenticate(&credentials.password, &user.password_hash, claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => ApiError::invalid_credentials(),
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(LoginResponseData {
        message: format!("welcome, {}", user.username),
        token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
