//! Axum integration for `session-auth`
//!
//! Provides extractors that turn an `Authorization: Bearer` header into a
//! resolved session, and a small router for reading and ending the caller's
//! own session.

mod error;
mod router;
mod session;

pub use error::{IntoResponseError, session_error_response};
pub use router::{CURRENT_SESSION, session_router};
pub use session::{AuthRejection, AuthSession, BearerToken, bearer_header, bearer_token};

pub use session_auth::{SessionError, SessionManager, SessionToken};
