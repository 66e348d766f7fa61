use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{SESSION_ID_LENGTH, SessionConfig};
use crate::storage::{SessionStore, StorageError, build_store};
use crate::token::{
    SessionId, SessionSecret, SessionToken, Verification, extract_id, mint_with_secret, verify,
};

use super::errors::SessionError;

/// Start a session holding `payload` and return the bearer token for it.
///
/// Exactly one store write. A failed write is returned to the caller as is.
pub async fn begin_session<T>(
    payload: &T,
    secret: &SessionSecret,
    store: &dyn SessionStore,
) -> Result<SessionToken, SessionError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_string(payload)?;
    let minted = mint_with_secret(SESSION_ID_LENGTH, secret)?;

    store
        .set(minted.session_id.as_str(), value)
        .await
        .inspect_err(|e| tracing::error!("Failed to store new session: {}", e))?;

    tracing::debug!("Session started");
    Ok(minted.token)
}

/// Check `token` and load the payload stored for it.
///
/// On a sliding-expiration backend this also pushes the session's expiry out.
pub async fn resolve_session<T>(
    token: &str,
    secret: &SessionSecret,
    store: &dyn SessionStore,
) -> Result<T, SessionError>
where
    T: DeserializeOwned,
{
    let session_id = match verify(token, secret, SESSION_ID_LENGTH)? {
        Verification::Valid(id) => id,
        Verification::Invalid => {
            tracing::warn!("Rejected session token with invalid signature");
            return Err(SessionError::SignatureMismatch);
        }
    };

    let value = store.get(session_id.as_str()).await.map_err(|e| {
        match &e {
            StorageError::NotFound => tracing::debug!("No session state for token"),
            other => tracing::error!("Failed to load session state: {}", other),
        }
        SessionError::from(e)
    })?;

    Ok(serde_json::from_str(&value)?)
}

/// Delete the state behind `token`.
///
/// The signature is not checked here; callers gate sign-out on an
/// authenticated request. Ending a session that no longer exists succeeds.
pub async fn end_session(token: &str, store: &dyn SessionStore) -> Result<(), SessionError> {
    let session_id = extract_id(token, SESSION_ID_LENGTH)?;

    match store.delete(session_id.as_str()).await {
        Ok(()) => {
            tracing::debug!("Session ended");
            Ok(())
        }
        Err(StorageError::NotFound) => {
            tracing::debug!("Session already ended or expired");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to delete session: {}", e);
            Err(e.into())
        }
    }
}

/// Entry point for everything session related.
///
/// Cloning is cheap: the store is shared and the signing key is small.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    signing_key: SessionSecret,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, signing_key: SessionSecret) -> Self {
        Self { store, signing_key }
    }

    pub async fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let store = build_store(config).await?;
        Ok(Self::new(store, config.signing_key.clone()))
    }

    pub async fn from_env() -> Result<Self, SessionError> {
        let config = SessionConfig::from_env()?;
        Self::from_config(&config).await
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub async fn begin<T>(&self, payload: &T) -> Result<SessionToken, SessionError>
    where
        T: Serialize + ?Sized,
    {
        begin_session(payload, &self.signing_key, self.store.as_ref()).await
    }

    pub async fn resolve<T>(&self, token: &str) -> Result<T, SessionError>
    where
        T: DeserializeOwned,
    {
        resolve_session(token, &self.signing_key, self.store.as_ref()).await
    }

    pub async fn end(&self, token: &str) -> Result<(), SessionError> {
        end_session(token, self.store.as_ref()).await
    }

    /// Check only the token's signature, without touching the store.
    pub fn verify_token(&self, token: &str) -> Result<SessionId, SessionError> {
        match verify(token, &self.signing_key, SESSION_ID_LENGTH)? {
            Verification::Valid(id) => Ok(id),
            Verification::Invalid => Err(SessionError::SignatureMismatch),
        }
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("signing_key", &self.signing_key)
            .finish_non_exhaustive()
    }
}
