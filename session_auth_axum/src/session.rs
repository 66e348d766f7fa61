use axum::{
    extract::{FromRef, FromRequestParts},
    response::{IntoResponse, Response},
};
use http::{
    HeaderMap, HeaderValue, StatusCode,
    header::{AUTHORIZATION, InvalidHeaderValue},
    request::Parts,
};
use serde::de::DeserializeOwned;

use session_auth::{SessionError, SessionManager, SessionToken};

use crate::error::session_error_response;

const BEARER_PREFIX: &str = "Bearer ";

/// Why a request could not be tied to a session.
#[derive(Debug)]
pub enum AuthRejection {
    /// No `Authorization: Bearer ...` header.
    MissingToken,
    Session(SessionError),
}

impl From<SessionError> for AuthRejection {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                tracing::debug!("Missing or invalid authorization header");
                (StatusCode::UNAUTHORIZED, "Invalid authorization header").into_response()
            }
            Self::Session(err) => session_error_response(err).into_response(),
        }
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Response headers carrying a freshly issued session token.
pub fn bearer_header(token: &SessionToken) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("{BEARER_PREFIX}{token}"))?,
    );
    Ok(headers)
}

/// The raw bearer token of a request, unchecked.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(&parts.headers)
            .map(|token| Self(token.to_string()))
            .ok_or(AuthRejection::MissingToken)
    }
}

/// A resolved session, available as an Axum extractor
///
/// Reads the bearer token, verifies it, and loads the session payload through
/// the [`SessionManager`] held in router state. On a sliding-expiration store
/// this also extends the session.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use session_auth::SessionManager;
/// use session_auth_axum::AuthSession;
///
/// async fn whoami(session: AuthSession<i64>) -> String {
///     format!("user {}", session.payload)
/// }
///
/// let app: Router<SessionManager> = Router::new().route("/whoami", get(whoami));
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession<T> {
    pub token: String,
    pub payload: T,
}

impl<S, T> FromRequestParts<S> for AuthSession<T>
where
    SessionManager: FromRef<S>,
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or(AuthRejection::MissingToken)?
            .to_string();

        let manager = SessionManager::from_ref(state);
        let payload = manager.resolve::<T>(&token).await?;

        Ok(Self { token, payload })
    }
}
