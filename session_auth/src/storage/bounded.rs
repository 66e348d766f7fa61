use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use super::errors::StorageError;
use super::types::{Bounded, SessionStore};

impl<S: SessionStore> Bounded<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn run<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = Result<T, StorageError>> + Send,
    ) -> Result<T, StorageError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Session store {} exceeded {:?}", op, self.timeout);
                Err(StorageError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl<S: SessionStore> SessionStore for Bounded<S> {
    async fn init(&self) -> Result<(), StorageError> {
        self.run("init", self.inner.init()).await
    }

    async fn get(&self, key: &str) -> Result<String, StorageError> {
        self.run("get", self.inner.get(key)).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.run("set", self.inner.set(key, value)).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.run("delete", self.inner.delete(key)).await
    }
}
