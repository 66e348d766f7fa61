use http::{Result as HttpResponse, StatusCode};
use session_auth::SessionError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Map a session error to a status and body.
///
/// 401 when the caller has no usable session, 500 otherwise. The 401 body is
/// the same for forged, malformed, and expired tokens.
pub fn session_error_response(e: SessionError) -> (StatusCode, String) {
    if e.is_unauthorized() {
        tracing::debug!("Rejecting request: {}", e);
        (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
    } else {
        tracing::error!("Session subsystem failure: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(session_error_response)
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}
