//! Ciphertext blob layout.
//!
//! ```text
//!   [ key salt (key_size) | MAC (mac_len) | IV (block_size) | ciphertext ]
//! ```
//!
//! The MAC covers `IV || ciphertext`. There are no length prefixes: every
//! field width follows from the cipher spec and the MAC hash.

use crate::crypto::cipher::CipherSpec;
use crate::crypto::hash::HashAlgorithm;

/// Field widths of a blob for one `(cipher, mac hash)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobLayout {
    pub cipher: CipherSpec,
    pub key_size: usize,
    pub mac_len: usize,
    pub block_size: usize,
}

/// Borrowed views into a blob. No bytes are copied.
#[derive(Debug, Clone, Copy)]
pub struct BlobParts<'a> {
    pub key_salt: &'a [u8],
    pub mac: &'a [u8],
    pub iv: &'a [u8],
    pub payload: &'a [u8],
    /// `IV || payload`, the region the MAC authenticates.
    pub signed: &'a [u8],
}

impl BlobLayout {
    pub fn new(cipher: CipherSpec, mac_hash: HashAlgorithm) -> Self {
        Self {
            cipher,
            key_size: cipher.key_size(),
            mac_len: mac_hash.output_len(),
            block_size: cipher.block_size(),
        }
    }

    /// Bytes before the ciphertext.
    pub fn header_len(&self) -> usize {
        self.key_size + self.mac_len + self.block_size
    }

    /// Total blob length for a plaintext of `plaintext_len` bytes.
    pub fn sealed_len(&self, plaintext_len: usize) -> usize {
        self.header_len() + self.cipher.ciphertext_len(plaintext_len)
    }

    /// Split `blob` into its fields.
    ///
    /// Returns `None` if the blob cannot even hold the fixed-size header.
    /// The payload may be empty; a sealed blob never has one, but that is
    /// for the MAC check to decide.
    pub fn split<'a>(&self, blob: &'a [u8]) -> Option<BlobParts<'a>> {
        if blob.len() < self.header_len() {
            return None;
        }

        let (key_salt, rest) = blob.split_at(self.key_size);
        let (mac, signed) = rest.split_at(self.mac_len);
        let (iv, payload) = signed.split_at(self.block_size);

        Some(BlobParts {
            key_salt,
            mac,
            iv,
            payload,
            signed,
        })
    }
}
