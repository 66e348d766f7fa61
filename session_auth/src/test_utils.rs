//! Shared helpers for unit tests across the crate

use async_trait::async_trait;
use std::sync::{Arc, Once};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::session::SessionManager;
use crate::storage::{InMemorySessionStore, SessionStore, StorageError};
use crate::token::SessionSecret;

/// Load `.env_test` (falling back to `.env`) once per test binary.
pub(crate) fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// Redis URL for live backend tests, if one is configured.
pub(crate) fn redis_test_url() -> Option<String> {
    init_test_environment();
    std::env::var("SESSION_TEST_REDIS_URL")
        .ok()
        .filter(|url| !url.is_empty())
}

/// A key no other test run will collide with.
pub(crate) fn unique_key(label: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("test_{label}_{}_{n}", std::process::id())
}

pub(crate) fn test_manager() -> SessionManager {
    SessionManager::new(
        Arc::new(InMemorySessionStore::new()),
        SessionSecret::new(b"test-signing-key".to_vec()),
    )
}

/// Store whose every operation fails with a backend error.
pub(crate) struct FailingStore {
    message: String,
}

impl FailingStore {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, StorageError> {
        Err(StorageError::Backend(self.message.clone()))
    }
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn init(&self) -> Result<(), StorageError> {
        self.fail()
    }

    async fn get(&self, _key: &str) -> Result<String, StorageError> {
        self.fail()
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        self.fail()
    }
}

/// In-memory store that sleeps before every operation.
pub(crate) struct SlowStore {
    delay: Duration,
    inner: InMemorySessionStore,
}

impl SlowStore {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: InMemorySessionStore::new(),
        }
    }
}

#[async_trait]
impl SessionStore for SlowStore {
    async fn init(&self) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.init().await
    }

    async fn get(&self, key: &str) -> Result<String, StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete(key).await
    }
}
