mod codec;
mod errors;
mod types;

pub use codec::{SECRET_LENGTH, extract_id, mint, mint_with_secret, verify};
pub use errors::TokenError;
pub use types::{MintedToken, SessionId, SessionSecret, SessionToken, Verification};
