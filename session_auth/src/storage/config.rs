use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::SessionConfig;

use super::errors::StorageError;
use super::types::{Bounded, InMemorySessionStore, RedisSessionStore, SessionStore};

/// Which backend holds session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Redis,
}

impl FromStr for StoreKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            t => Err(StorageError::InvalidConfig(format!(
                "Unsupported session store type: {t}. Supported types are 'memory' and 'redis'"
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Redis => f.write_str("redis"),
        }
    }
}

/// Construct the configured backend, bounded by the configured timeout.
pub async fn build_store(config: &SessionConfig) -> Result<Arc<dyn SessionStore>, StorageError> {
    tracing::info!(
        "Initializing session store with type: {}, ttl: {:?}, timeout: {:?}",
        config.store_kind,
        config.ttl,
        config.store_timeout
    );

    let store: Arc<dyn SessionStore> = match (config.store_kind, config.store_timeout) {
        (StoreKind::Memory, None) => Arc::new(InMemorySessionStore::new()),
        (StoreKind::Memory, Some(timeout)) => {
            Arc::new(Bounded::new(InMemorySessionStore::new(), timeout))
        }
        (StoreKind::Redis, timeout) => {
            let redis = RedisSessionStore::new(&config.store_url, config.ttl)?;
            match timeout {
                Some(timeout) => Arc::new(Bounded::new(redis, timeout)),
                None => Arc::new(redis),
            }
        }
    };

    if let Err(e) = store.init().await {
        tracing::error!("Failed to initialize {} session store: {}", config.store_kind, e);
        return Err(e);
    }

    tracing::info!("Connected to session store: type={}", config.store_kind);
    Ok(store)
}
