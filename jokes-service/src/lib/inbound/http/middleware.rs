use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated caller into route handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Token guard for protected routes.
///
/// Presence check first, then signature and expiry validation; on success
/// the decoded identity is attached to the request and it proceeds.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::token_invalid()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::token_invalid()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token(req: &Request) -> Result<&str, ApiError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(ApiError::token_required)?;

    // The header value is the raw signed token, not a "Bearer "-prefixed
    // scheme; that is the wire contract clients follow.
    header.to_str().map_err(|_| ApiError::token_invalid())
}
