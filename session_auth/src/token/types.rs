use std::fmt;

use crate::utils::base64url_encode;

/// Opaque session identifier, base64url-encoded. Used as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self(base64url_encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Key material for signing session IDs.
///
/// Either minted fresh per session or loaded once from configuration and
/// shared by every session the process issues.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionSecret([REDACTED; {} bytes])", self.0.len())
    }
}

/// Bearer credential handed to the client: `base64url(id ++ signature)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub(crate) fn from_parts(id: &[u8], signature: &[u8]) -> Self {
        let mut raw = Vec::with_capacity(id.len() + signature.len());
        raw.extend_from_slice(id);
        raw.extend_from_slice(signature);
        Self(base64url_encode(&raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

/// Result of a successful mint.
#[derive(Debug, Clone)]
pub struct MintedToken {
    pub token: SessionToken,
    pub session_id: SessionId,
    pub secret: SessionSecret,
}

/// Outcome of checking a token's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid(SessionId),
    Invalid,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}
