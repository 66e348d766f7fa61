use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StorageError;
use super::types::{InMemorySessionStore, SessionStore};

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entry: Mutex::new(HashMap::new()),
        }
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.entry.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entry.lock().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn get(&self, key: &str) -> Result<String, StorageError> {
        self.entry
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entry.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entry
            .lock()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}
