use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

use super::errors::StorageError;

/// Key/value persistence for serialized session state.
///
/// All backends report a missing, deleted, or expired key the same way:
/// [`StorageError::NotFound`].
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Verify the backend is reachable. Called once when the store is built.
    async fn init(&self) -> Result<(), StorageError>;

    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> Result<String, StorageError>;

    /// Insert or replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`. Fails with [`StorageError::NotFound`] if it was absent.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store. Entries never expire.
pub struct InMemorySessionStore {
    pub(super) entry: Mutex<HashMap<String, String>>,
}

/// Redis-backed store with sliding expiration.
pub struct RedisSessionStore {
    pub(super) client: redis::Client,
    pub(super) ttl: Duration,
}

/// Wraps a store so that no single operation outlives `timeout`.
pub struct Bounded<S> {
    pub(super) inner: S,
    pub(super) timeout: Duration,
}
