use async_trait::async_trait;
use redis::{self, AsyncCommands};
use std::time::Duration;

use super::errors::StorageError;
use super::types::{RedisSessionStore, SessionStore};

const SESSION_PREFIX: &str = "session";

impl RedisSessionStore {
    /// Build a store for `url` and check that the server answers.
    ///
    /// `url` may be a full `redis://` URL or a bare `host:port` address.
    pub async fn connect(url: &str, ttl: Duration) -> Result<Self, StorageError> {
        let store = Self::new(url, ttl)?;
        store.init().await?;
        tracing::info!("Connected to Redis session store, ttl={:?}", ttl);
        Ok(store)
    }

    /// Build a store without contacting the server.
    pub fn new(url: &str, ttl: Duration) -> Result<Self, StorageError> {
        if ttl_millis(ttl) == 0 {
            return Err(StorageError::InvalidConfig(format!(
                "session TTL must be at least one millisecond, got {ttl:?}"
            )));
        }
        let client = redis::Client::open(normalize_url(url))?;
        Ok(Self { client, ttl })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn ttl_millis(&self) -> i64 {
        ttl_millis(self.ttl)
    }

    fn make_key(key: &str) -> String {
        format!("{SESSION_PREFIX}:{key}")
    }
}

/// Expiry in whole milliseconds, as `PX`/`PEXPIRE` take it.
fn ttl_millis(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}

fn normalize_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("redis://{url}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        // Read and refresh in one MULTI/EXEC so the entry cannot lapse in between.
        let (value, _refreshed): (Option<String>, i64) = redis::pipe()
            .atomic()
            .get(&key)
            .cmd("PEXPIRE")
            .arg(&key)
            .arg(self.ttl_millis())
            .query_async(&mut conn)
            .await?;

        value.ok_or(StorageError::NotFound)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let _: () = redis::cmd("SET")
            .arg(&key)
            .arg(value)
            .arg("PX")
            .arg(self.ttl_millis())
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let removed: i64 = conn.del(&key).await?;
        if removed == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
