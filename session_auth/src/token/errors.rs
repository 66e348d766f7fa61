use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The system random source could not supply bytes.
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<UtilError> for TokenError {
    fn from(err: UtilError) -> Self {
        match err {
            UtilError::Crypto(msg) => Self::Entropy(msg),
            UtilError::Format(msg) => Self::Malformed(msg),
        }
    }
}
