//! Cryptographic primitives for cryptobox.
//!
//! This module provides:
//! - Secret- and password-based authenticated encryption (`encryption`)
//! - HKDF and PBKDF2 key derivation (`kdf`, `keys`)
//! - AES-CBC cipher specs (`cipher`) and hash selection (`hash`)
//! - HMAC-prefixed data (`mac`), constant-time comparison (`compare`)
//! - OS randomness (`random`) and the blob layout (`blob`)

pub mod blob;
pub mod cipher;
pub mod compare;
pub mod encryption;
pub mod hash;
pub mod kdf;
pub mod keys;
pub mod mac;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use cryptobox::crypto::{CryptoBox, Decrypted, derive_key, ...};
pub use blob::{BlobLayout, BlobParts};
pub use cipher::CipherSpec;
pub use compare::constant_time_equals;
pub use encryption::{CryptoBox, CryptoBoxConfig, Decrypted};
pub use hash::HashAlgorithm;
pub use kdf::{derive_key, derive_password_key};
pub use keys::DerivedKey;
pub use mac::{hash_data, verify_data};
pub use random::{generate_random_bytes, generate_random_key, generate_random_string};
