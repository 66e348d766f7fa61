mod bounded;
mod config;
mod errors;
mod memory;
mod redis;
mod types;

pub use config::{StoreKind, build_store};
pub use errors::StorageError;
pub use types::{Bounded, InMemorySessionStore, RedisSessionStore, SessionStore};
