use axum::Extension;
use axum::Json;

use crate::domain::joke;
use crate::domain::joke::Joke;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Serve the protected joke collection.
///
/// The token guard has already run; the handler returns the static
/// collection unmodified.
pub async fn list_jokes(Extension(user): Extension<AuthenticatedUser>) -> Json<&'static [Joke]> {
    tracing::debug!(username = %user.username, "Serving joke collection");

    Json(joke::catalog())
}
