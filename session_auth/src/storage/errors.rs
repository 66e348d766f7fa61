use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The key was never set, has been deleted, or has expired.
    #[error("Session not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Backend(String),

    #[error("Storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    #[error("Invalid storage configuration: {0}")]
    InvalidConfig(String),
}

impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
