//! Zeroize-on-drop holder for derived key material.

use zeroize::Zeroize;

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::kdf::derive_key;
use crate::errors::Result;

/// Bytes produced by a key-derivation function.
///
/// The buffer is wiped when the value is dropped, so a per-message key
/// cannot linger after `encrypt` / `decrypt` return.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: Vec<u8>,
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to key a cipher or HMAC).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Derive the authentication key from this encryption key.
    ///
    /// HKDF with no salt and `label` as context, output the same size as
    /// this key. The encryption key is never used directly as a MAC key.
    pub fn derive_auth_key(&self, hash: HashAlgorithm, label: &[u8]) -> Result<DerivedKey> {
        derive_key(hash, &self.bytes, None, Some(label), self.bytes.len())
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        crate::crypto::compare::constant_time_equals(&self.bytes, &other.bytes)
    }
}

impl Eq for DerivedKey {}
