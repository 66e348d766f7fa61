//! Routes for inspecting and ending the caller's own session

use axum::{
    Json, Router,
    extract::{FromRef, Path, State},
    routing::get,
};
use http::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

use session_auth::SessionManager;

use crate::error::IntoResponseError;
use crate::session::{AuthSession, BearerToken};

/// Path segment that addresses the session carried by the request.
pub const CURRENT_SESSION: &str = "mine";

/// Create a router for the caller's session, parameterized by payload type `T`
///
/// The endpoints are:
/// - `GET /sessions/mine` returns the session payload as JSON
/// - `DELETE /sessions/mine` ends the session and answers `204 No Content`
///
/// Any other segment in place of `mine` is answered with `403 Forbidden`.
/// Nest it wherever the application wants it, e.g. under `/v1`.
pub fn session_router<T, S>() -> Router<S>
where
    T: Serialize + DeserializeOwned + Send + 'static,
    SessionManager: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/sessions/{session}",
        get(current_session::<T>).delete(sign_out),
    )
}

async fn current_session<T>(
    Path(session): Path<String>,
    auth: AuthSession<T>,
) -> Result<Json<T>, (StatusCode, String)>
where
    T: Serialize,
{
    if session != CURRENT_SESSION {
        return Err(forbidden(&session));
    }
    Ok(Json(auth.payload))
}

async fn sign_out(
    State(manager): State<SessionManager>,
    Path(session): Path<String>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, (StatusCode, String)> {
    if session != CURRENT_SESSION {
        return Err(forbidden(&session));
    }

    // A valid signature is enough; the session may already be gone.
    manager.verify_token(&token).into_response_error()?;
    manager.end(&token).await.into_response_error()?;

    tracing::debug!("Session ended");
    Ok(StatusCode::NO_CONTENT)
}

fn forbidden(session: &str) -> (StatusCode, String) {
    tracing::debug!("Refusing access to session {:?}", session);
    (StatusCode::FORBIDDEN, "Forbidden".to_string())
}
