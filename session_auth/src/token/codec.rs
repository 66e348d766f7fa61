//! Minting and verification of signed session tokens.
//!
//! A token is `base64url(id ++ HMAC-SHA256(secret, id))`. The server never
//! needs to look anything up to check the signature, only to load the state
//! behind the ID.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::utils::{base64url_decode, gen_random_bytes};

use super::errors::TokenError;
use super::types::{MintedToken, SessionId, SessionSecret, SessionToken, Verification};

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of a freshly minted per-session secret.
pub const SECRET_LENGTH: usize = 32;

/// Mint a token with a fresh per-session secret.
///
/// The returned secret is not stored anywhere by this crate; whoever keeps it
/// is the only party able to verify the token later.
pub fn mint(id_len: usize) -> Result<MintedToken, TokenError> {
    let secret = SessionSecret::new(gen_random_bytes(SECRET_LENGTH)?);
    mint_with_secret(id_len, &secret)
}

/// Mint a token signed with the supplied secret.
pub fn mint_with_secret(id_len: usize, secret: &SessionSecret) -> Result<MintedToken, TokenError> {
    let id = gen_random_bytes(id_len)?;
    let signature = sign_id(&id, secret)?;

    Ok(MintedToken {
        token: SessionToken::from_parts(&id, &signature),
        session_id: SessionId::from_bytes(&id),
        secret: secret.clone(),
    })
}

/// Check a token's signature against `secret`.
///
/// A signature mismatch is reported as [`Verification::Invalid`], not as an
/// error. Errors are reserved for tokens that cannot be decoded or carry no
/// signature at all.
pub fn verify(
    token: &str,
    secret: &SessionSecret,
    id_len: usize,
) -> Result<Verification, TokenError> {
    let raw = decode_token(token, id_len)?;
    let (id, signature) = raw.split_at(id_len);

    let expected = sign_id(id, secret)?;
    if bool::from(expected.as_slice().ct_eq(signature)) {
        Ok(Verification::Valid(SessionId::from_bytes(id)))
    } else {
        Ok(Verification::Invalid)
    }
}

/// Return the ID portion of a token without checking its signature.
pub fn extract_id(token: &str, id_len: usize) -> Result<SessionId, TokenError> {
    let raw = decode_token(token, id_len)?;
    Ok(SessionId::from_bytes(&raw[..id_len]))
}

fn decode_token(token: &str, id_len: usize) -> Result<Vec<u8>, TokenError> {
    let raw = base64url_decode(token)?;
    if raw.len() <= id_len {
        return Err(TokenError::Malformed("token is too short".to_string()));
    }
    Ok(raw)
}

fn sign_id(id: &[u8], secret: &SessionSecret) -> Result<Vec<u8>, TokenError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| TokenError::Crypto(format!("Invalid HMAC key: {e}")))?;
    mac.update(id);
    Ok(mac.finalize().into_bytes().to_vec())
}
