//! Secret-based authenticated symmetric encryption.
//!
//! ```no_run
//! use cryptobox::crypto::{CryptoBox, Decrypted};
//!
//! let cb = CryptoBox::default();
//! let blob = cb.encrypt(b"the quick brown fox", b"correct horse battery staple", None)?;
//! match cb.decrypt(&blob, b"correct horse battery staple", None)? {
//!     Decrypted::Plaintext(data) => assert_eq!(data, b"the quick brown fox"),
//!     Decrypted::AuthenticationFailed => unreachable!(),
//! }
//! # Ok::<(), cryptobox::errors::CryptoBoxError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
