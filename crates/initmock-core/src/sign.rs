//! Two-stage HMAC-SHA256 signing.
//!
//! Stage 1 derives the signing key: HMAC-SHA256 keyed by the literal
//! [`crate::domain::WEB_APP_DATA`] label over the secret, raw 32-byte
//! digest. Stage 2 tags the data-check-string with that key and emits
//! lowercase hex. The key is recomputed on every call; nothing is cached
//! across calls.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain;
use crate::errors::{InitDataError, InitResult};

type HmacSha256 = Hmac<Sha256>;

/// Derive the per-secret signing key (stage 1).
///
/// The raw digest, not its hex form, keys the second stage.
pub fn derive_signing_key(secret: &str) -> InitResult<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(domain::WEB_APP_DATA.as_bytes())
        .map_err(|e| InitDataError::encoding(format!("domain label rejected as hmac key: {e}")))?;
    mac.update(secret.as_bytes());
    Ok(mac.finalize().into_bytes().into())
}

/// Tag a data-check-string with the key derived from `secret` (stage 2).
///
/// Returns 64 lowercase hex characters. Pure: identical inputs always
/// produce the identical tag.
pub fn sign_init_data(data_check_string: &str, secret: &str) -> InitResult<String> {
    let key = derive_signing_key(secret)?;
    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| InitDataError::encoding(format!("derived key rejected as hmac key: {e}")))?;
    mac.update(data_check_string.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "auth_date=1700000000\nchat_type=private\nuser={\"id\":1}";

    #[test]
    fn known_vector() {
        let tag = sign_init_data(CANONICAL, "test_token").unwrap();
        assert_eq!(
            tag,
            "7947f472778f2adccec0c6ae3825da8dd547bd0e7891b6e7e9ed6815e7bb52c5"
        );
    }

    #[test]
    fn empty_canonical_vector() {
        let tag = sign_init_data("", "test_token").unwrap();
        assert_eq!(
            tag,
            "f7152da775e384879cb104b7d03041ae3154de42f86ea2514dee515a41db5bf1"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let a = sign_init_data(CANONICAL, "test_token").unwrap();
        let b = sign_init_data(CANONICAL, "test_token").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tag_is_64_lowercase_hex() {
        let tag = sign_init_data(CANONICAL, "test_token").unwrap();
        assert_eq!(tag.len(), 64);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn secret_changes_the_tag() {
        let a = sign_init_data(CANONICAL, "test_token").unwrap();
        let b = sign_init_data(CANONICAL, "other_token").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn raw_separator_characters_in_values() {
        // Values carrying '=' and '&' are signed as-is.
        let tag = sign_init_data("a=x=y\nb=p&q/r", "another_token").unwrap();
        assert_eq!(
            tag,
            "ad3204378fc76197a8445e1ce690991f475ff0e23757d66c1ece3f54949bdd86"
        );
    }

    #[test]
    fn derived_key_differs_from_secret() {
        let key = derive_signing_key("test_token").unwrap();
        assert_eq!(key.len(), 32);
        assert_ne!(&key[..], "test_token".as_bytes());
    }
}
