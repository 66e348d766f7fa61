use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;
use crate::token::TokenError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Malformed session token: {0}")]
    MalformedToken(String),

    #[error("Session token signature mismatch")]
    SignatureMismatch,

    #[error("Session not found")]
    NotFound,

    #[error("Session store unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SessionError {
    /// Whether the caller simply lacks a valid session, as opposed to the
    /// server failing to check one.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken(_) | Self::SignatureMismatch | Self::NotFound
        )
    }
}

impl From<TokenError> for SessionError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Entropy(msg) => Self::Entropy(msg),
            TokenError::Malformed(msg) => Self::MalformedToken(msg),
            TokenError::Crypto(msg) => Self::Entropy(msg),
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::NotFound,
            StorageError::Backend(msg) => Self::BackendUnavailable(msg),
            e @ StorageError::Timeout(_) => Self::BackendUnavailable(e.to_string()),
            StorageError::Serde(msg) => Self::Serde(msg),
            StorageError::InvalidConfig(msg) => Self::Config(msg),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
