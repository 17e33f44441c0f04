//! Cryptographically secure randomness from the operating system.
//!
//! Every helper goes through `OsRng::try_fill_bytes`. If the OS source
//! fails, the error is surfaced; there is no fallback generator.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use crate::errors::{CryptoBoxError, Result};

/// Fill a fresh buffer of `len` bytes from the OS random source.
///
/// `len == 0` yields an empty buffer.
pub fn generate_random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoBoxError::RandomSourceUnavailable(e.to_string()))?;
    Ok(buf)
}

/// Generate a random key of `len` bytes, wiped from memory on drop.
pub fn generate_random_key(len: usize) -> Result<Zeroizing<Vec<u8>>> {
    if len == 0 {
        return Err(CryptoBoxError::InvalidArgument(
            "key length must be at least 1 byte".into(),
        ));
    }
    generate_random_bytes(len).map(Zeroizing::new)
}

/// Generate a random string of exactly `len` URL-safe characters
/// (`A-Z a-z 0-9 - _`).
pub fn generate_random_string(len: usize) -> Result<String> {
    if len == 0 {
        return Err(CryptoBoxError::InvalidArgument(
            "random string length must be at least 1".into(),
        ));
    }
    let bytes = generate_random_key(len)?;
    let mut encoded = URL_SAFE_NO_PAD.encode(bytes.as_slice());
    // Base64 of `len` bytes is always longer than `len` characters.
    encoded.truncate(len);
    Ok(encoded)
}
