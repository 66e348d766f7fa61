use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use session_auth::{SessionManager, SessionState};
use session_auth_axum::{AuthSession, IntoResponseError, bearer_header};

/// What the demo keeps in each session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct DemoUser {
    pub(crate) email: String,
}

pub(crate) type DemoSession = SessionState<DemoUser>;

#[derive(Debug, Deserialize)]
pub(crate) struct SignIn {
    email: String,
}

/// Demo sign-in: any plausible email address gets a session.
pub(crate) async fn sign_in(
    State(manager): State<SessionManager>,
    Json(body): Json<SignIn>,
) -> Result<Response, (StatusCode, String)> {
    let email = body.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err((StatusCode::BAD_REQUEST, "Invalid email".to_string()));
    }

    let user = DemoUser {
        email: email.to_string(),
    };
    let state = SessionState::new(user.clone());
    let token = manager.begin(&state).await.into_response_error()?;
    let headers =
        bearer_header(&token).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::debug!("Demo sign-in issued a session");
    Ok((StatusCode::CREATED, headers, Json(user)).into_response())
}

pub(crate) async fn me(session: AuthSession<DemoSession>) -> Json<DemoUser> {
    tracing::trace!("Session started at {}", session.payload.start);
    Json(session.payload.user)
}
