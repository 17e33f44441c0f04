//! AES in CBC mode with PKCS#7 padding.
//!
//! CBC gives no integrity on its own; authentication is layered on top by
//! `CryptoBox` (Encrypt-then-MAC). The set of allowed specs is closed: a
//! name outside it never parses.

use std::fmt;
use std::str::FromStr;

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyIvInit};

use crate::errors::{CryptoBoxError, Result};

/// AES block size in bytes, shared by every allowed spec.
const AES_BLOCK_LEN: usize = 16;

/// An allowed cipher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherSpec {
    /// 128-bit key, CBC mode.
    Aes128Cbc,
    /// 192-bit key, CBC mode.
    Aes192Cbc,
    /// 256-bit key, CBC mode.
    Aes256Cbc,
}

impl CipherSpec {
    /// The allowed set.
    pub const ALL: [CipherSpec; 3] = [Self::Aes128Cbc, Self::Aes192Cbc, Self::Aes256Cbc];

    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128Cbc => "AES-128-CBC",
            Self::Aes192Cbc => "AES-192-CBC",
            Self::Aes256Cbc => "AES-256-CBC",
        }
    }

    /// Block (and IV) size in bytes.
    pub fn block_size(self) -> usize {
        AES_BLOCK_LEN
    }

    /// Key (and key salt) size in bytes.
    pub fn key_size(self) -> usize {
        match self {
            Self::Aes128Cbc => 16,
            Self::Aes192Cbc => 24,
            Self::Aes256Cbc => 32,
        }
    }

    /// Length of the ciphertext produced for `plaintext_len` bytes.
    ///
    /// PKCS#7 always adds at least one byte, so an exact multiple of the
    /// block size grows by a full block.
    pub fn ciphertext_len(self, plaintext_len: usize) -> usize {
        (plaintext_len / self.block_size() + 1) * self.block_size()
    }

    /// Encrypt `data` under `key` and `iv`.
    pub fn encrypt(self, key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let bad_len =
            |e: InvalidLength| CryptoBoxError::EncryptionFailed(format!("{}: {e}", self.name()));
        let ciphertext = match self {
            Self::Aes128Cbc => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
            Self::Aes192Cbc => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
            Self::Aes256Cbc => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
        };
        Ok(ciphertext)
    }

    /// Decrypt `data` under `key` and `iv`, stripping the padding.
    pub fn decrypt(self, key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let bad_len =
            |e: InvalidLength| CryptoBoxError::DecryptionFailed(format!("{}: {e}", self.name()));
        let unpadded = match self {
            Self::Aes128Cbc => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .decrypt_padded_vec_mut::<Pkcs7>(data),
            Self::Aes192Cbc => cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .decrypt_padded_vec_mut::<Pkcs7>(data),
            Self::Aes256Cbc => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(bad_len)?
                .decrypt_padded_vec_mut::<Pkcs7>(data),
        };
        unpadded.map_err(|_| {
            CryptoBoxError::DecryptionFailed(format!(
                "{}: invalid padding or truncated ciphertext",
                self.name()
            ))
        })
    }
}

impl Default for CipherSpec {
    fn default() -> Self {
        Self::Aes128Cbc
    }
}

impl fmt::Display for CipherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherSpec {
    type Err = CryptoBoxError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|spec| spec.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
                CryptoBoxError::InvalidConfiguration(format!(
                    "cipher '{wanted}' is not allowed (allowed: {})",
                    allowed.join(", ")
                ))
            })
    }
}
