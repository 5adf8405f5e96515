use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::CredentialsRequest;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Registration pipeline: payload check, uniqueness check, hash, persist.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisteredUserData>), ApiError> {
    let credentials = body.try_into_credentials()?;

    let user = state
        .user_service
        .register_user(RegisterUserCommand::new(
            credentials.username,
            credentials.password,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json((&user).into())))
}

/// The persisted record as the route returns it.
///
/// `password` carries the stored hash, not the plaintext: the historical
/// contract of this route exposes the hash to the registering client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUserData {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl From<&User> for RegisteredUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            password: user.password_hash.clone(),
        }
    }
}
