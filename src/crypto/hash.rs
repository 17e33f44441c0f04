//! Hash algorithm selection for HMAC, HKDF and PBKDF2.
//!
//! The algorithm is picked once from configuration and then dispatched
//! with a plain `match` to the concrete RustCrypto types, so every
//! primitive below is the native `hmac` / `hkdf` / `pbkdf2` implementation.

use std::fmt;
use std::str::FromStr;

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::errors::{CryptoBoxError, Result};

macro_rules! hmac_tag {
    ($digest:ty, $key:expr, $message:expr) => {{
        let mut mac = <Hmac<$digest> as Mac>::new_from_slice($key)
            .map_err(|e| CryptoBoxError::InvalidConfiguration(format!("invalid HMAC key: {e}")))?;
        mac.update($message);
        mac.finalize().into_bytes().to_vec()
    }};
}

/// Hash functions accepted for key derivation and message authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in increasing output size.
    pub const ALL: [HashAlgorithm; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Canonical name, e.g. `SHA-256`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest (and therefore HMAC tag) length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Largest output HKDF can expand to: `255 * output_len`.
    pub fn max_hkdf_len(self) -> usize {
        255 * self.output_len()
    }

    /// Compute `HMAC(key, message)` with this hash.
    pub fn hmac(self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let tag = match self {
            Self::Sha256 => hmac_tag!(Sha256, key, message),
            Self::Sha384 => hmac_tag!(Sha384, key, message),
            Self::Sha512 => hmac_tag!(Sha512, key, message),
        };
        Ok(tag)
    }

    /// HKDF extract-and-expand into `okm`.
    ///
    /// `okm.len()` must already be bounds-checked by the caller.
    pub(crate) fn hkdf_into(
        self,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()> {
        let expanded = match self {
            Self::Sha256 => Hkdf::<Sha256>::new(salt, ikm).expand(info, okm),
            Self::Sha384 => Hkdf::<Sha384>::new(salt, ikm).expand(info, okm),
            Self::Sha512 => Hkdf::<Sha512>::new(salt, ikm).expand(info, okm),
        };
        expanded
            .map_err(|e| CryptoBoxError::InvalidConfiguration(format!("HKDF expand failed: {e}")))
    }

    /// PBKDF2-HMAC into `out`.
    pub(crate) fn pbkdf2_into(self, password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
        match self {
            Self::Sha256 => pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, rounds, out),
            Self::Sha384 => pbkdf2::pbkdf2_hmac::<Sha384>(password, salt, rounds, out),
            Self::Sha512 => pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, out),
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoBoxError;

    /// Accepts `sha256`, `SHA-256`, `Sha-384`, ... (case-insensitive,
    /// hyphen optional).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(CryptoBoxError::InvalidConfiguration(format!(
                "unsupported hash algorithm '{s}' (expected one of SHA-256, SHA-384, SHA-512)"
            ))),
        }
    }
}
