//! Wire encoding of access tokens.
//!
//! An access token is the base58 rendering of the 16 bytes of a `tokens.id`
//! UUID. Anything that does not decode to exactly 16 bytes is rejected.

use uuid::Uuid;

pub fn encode_token(id: Uuid) -> String {
    bs58::encode(id.as_bytes()).into_string()
}

pub fn decode_token(token: &str) -> Option<Uuid> {
    let bytes = bs58::decode(token.trim()).into_vec().ok()?;

    Uuid::from_slice(&bytes).ok()
}
