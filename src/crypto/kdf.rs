//! Key derivation: HKDF for high-entropy secrets, PBKDF2 for passwords.
//!
//! HKDF (RFC 5869) turns a master key plus a per-message salt into an
//! encryption key, and turns that key into a separate authentication key.
//! PBKDF2 stretches a human password when the caller encrypts by password.

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::keys::DerivedKey;
use crate::errors::{CryptoBoxError, Result};

/// Derive `length` bytes from `input_key` with HKDF extract-and-expand.
///
/// - `salt` of `None` makes HKDF use a zero-filled salt of hash length.
/// - `info` of `None` is the empty context.
/// - `length == 0` means "one hash output" (32 bytes for SHA-256).
///
/// Fails if `length` exceeds `255 * hash.output_len()`.
pub fn derive_key(
    hash: HashAlgorithm,
    input_key: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    length: usize,
) -> Result<DerivedKey> {
    let length = if length == 0 { hash.output_len() } else { length };
    if length > hash.max_hkdf_len() {
        return Err(CryptoBoxError::InvalidConfiguration(format!(
            "derived key length {length} exceeds the HKDF limit of {} bytes for {hash}",
            hash.max_hkdf_len()
        )));
    }

    let mut okm = DerivedKey::new(vec![0u8; length]);
    hash.hkdf_into(salt, input_key, info.unwrap_or_default(), okm.as_mut_bytes())?;
    Ok(okm)
}

/// Derive `length` bytes from a password with PBKDF2-HMAC.
///
/// The same password + salt + iterations always produce the same key.
/// `length == 0` means "one hash output".
pub fn derive_password_key(
    hash: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    length: usize,
) -> Result<DerivedKey> {
    if iterations < 1 {
        return Err(CryptoBoxError::InvalidArgument(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }
    let length = if length == 0 { hash.output_len() } else { length };

    let mut key = DerivedKey::new(vec![0u8; length]);
    hash.pbkdf2_into(password, salt, iterations, key.as_mut_bytes());
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_means_hash_length() {
        for hash in HashAlgorithm::ALL {
            let key = derive_key(hash, b"ikm", None, None, 0).unwrap();
            assert_eq!(key.len(), hash.output_len());
        }
    }

    #[test]
    fn length_limit_is_inclusive() {
        let hash = HashAlgorithm::Sha256;
        assert!(derive_key(hash, b"ikm", None, None, 255 * 32).is_ok());
        let err = derive_key(hash, b"ikm", None, None, 255 * 32 + 1).unwrap_err();
        assert!(matches!(err, CryptoBoxError::InvalidConfiguration(_)));
    }

    #[test]
    fn info_separates_outputs() {
        let hash = HashAlgorithm::Sha256;
        let a = derive_key(hash, b"ikm", Some(b"salt"), Some(b"one"), 16).unwrap();
        let b = derive_key(hash, b"ikm", Some(b"salt"), Some(b"two"), 16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn missing_info_equals_empty_info() {
        let hash = HashAlgorithm::Sha384;
        let a = derive_key(hash, b"ikm", Some(b"salt"), None, 24).unwrap();
        let b = derive_key(hash, b"ikm", Some(b"salt"), Some(b""), 24).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pbkdf2_rejects_zero_iterations() {
        let err = derive_password_key(HashAlgorithm::Sha256, b"pw", b"salt", 0, 16).unwrap_err();
        assert!(matches!(err, CryptoBoxError::InvalidArgument(_)));
    }

    #[test]
    fn pbkdf2_is_deterministic_and_salted() {
        let hash = HashAlgorithm::Sha256;
        let a = derive_password_key(hash, b"pw", b"salt-a", 10, 16).unwrap();
        let b = derive_password_key(hash, b"pw", b"salt-a", 10, 16).unwrap();
        let c = derive_password_key(hash, b"pw", b"salt-b", 10, 16).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
