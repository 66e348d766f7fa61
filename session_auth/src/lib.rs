//! session-auth - signed bearer-token sessions for Rust web services
//!
//! A session is started by minting a random ID, signing it with HMAC-SHA256,
//! and storing the caller's payload under that ID. The client keeps the
//! signed token; later requests present it to get the payload back.
//!
//! Backends are pluggable through [`SessionStore`]: an in-process map for
//! single-node deployments and tests, and Redis with sliding expiration.

mod config;
mod session;
mod storage;
mod token;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, SESSION_ID_LENGTH, SessionConfig, parse_duration};

pub use session::{
    SessionError, SessionManager, SessionState, begin_session, end_session, resolve_session,
};

pub use storage::{
    Bounded, InMemorySessionStore, RedisSessionStore, SessionStore, StorageError, StoreKind,
    build_store,
};

pub use token::{
    MintedToken, SECRET_LENGTH, SessionId, SessionSecret, SessionToken, TokenError, Verification,
    extract_id, mint, mint_with_secret, verify,
};

pub use utils::UtilError;
