mod errors;
mod manager;
mod types;

pub use errors::SessionError;
pub use manager::{SessionManager, begin_session, end_session, resolve_session};
pub use types::SessionState;
