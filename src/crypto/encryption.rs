//! Secret-based authenticated encryption (Encrypt-then-MAC).
//!
//! Each call to `encrypt` draws a fresh key salt and IV, derives a
//! per-message encryption key from the caller's secret, encrypts with
//! AES-CBC, derives a separate authentication key and prepends an HMAC
//! over `IV || ciphertext`.
//!
//! Layout of the returned byte buffer (see [`BlobLayout`]):
//!   [ key salt | HMAC | IV | ciphertext ]
//!
//! `decrypt` verifies the HMAC before touching the cipher. A mismatch is
//! an expected outcome and comes back as [`Decrypted::AuthenticationFailed`],
//! not as an error.

use tracing::debug;

use crate::crypto::blob::BlobLayout;
use crate::crypto::cipher::CipherSpec;
use crate::crypto::compare::constant_time_equals;
use crate::crypto::hash::HashAlgorithm;
use crate::crypto::kdf::{derive_key, derive_password_key};
use crate::crypto::keys::DerivedKey;
use crate::crypto::mac;
use crate::crypto::random::generate_random_bytes;
use crate::errors::{CryptoBoxError, Result};

/// Default context label for the authentication-key derivation.
pub const DEFAULT_AUTH_KEY_INFO: &str = "AuthorizationKey";

/// Default PBKDF2 iteration count for password-based encryption.
pub const DEFAULT_DERIVATION_ITERATIONS: u32 = 100_000;

/// Static configuration of a [`CryptoBox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoBoxConfig {
    /// Block cipher and key size.
    pub cipher: CipherSpec,
    /// Hash used by HKDF and PBKDF2.
    pub kdf_hash: HashAlgorithm,
    /// Hash used for the HMAC tag.
    pub mac_hash: HashAlgorithm,
    /// HKDF context that turns the encryption key into the MAC key.
    pub auth_key_info: String,
    /// PBKDF2 iterations for `encrypt_with_password`.
    pub derivation_iterations: u32,
}

impl Default for CryptoBoxConfig {
    fn default() -> Self {
        Self {
            cipher: CipherSpec::default(),
            kdf_hash: HashAlgorithm::Sha256,
            mac_hash: HashAlgorithm::Sha256,
            auth_key_info: DEFAULT_AUTH_KEY_INFO.to_string(),
            derivation_iterations: DEFAULT_DERIVATION_ITERATIONS,
        }
    }
}

/// Outcome of a decryption that did not hit a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Decrypted {
    /// The MAC verified and the payload decrypted.
    Plaintext(Vec<u8>),
    /// Wrong secret, wrong `info`, truncated or tampered blob.
    AuthenticationFailed,
}

impl Decrypted {
    pub fn is_authentic(&self) -> bool {
        matches!(self, Self::Plaintext(_))
    }

    /// The plaintext, or `None` if authentication failed.
    pub fn into_plaintext(self) -> Option<Vec<u8>> {
        match self {
            Self::Plaintext(data) => Some(data),
            Self::AuthenticationFailed => None,
        }
    }
}

/// How the per-message encryption key is obtained from the caller's secret.
#[derive(Clone, Copy)]
enum SecretKind<'a> {
    /// HKDF over a high-entropy key, with optional context.
    Key { info: Option<&'a [u8]> },
    /// PBKDF2 over a human password.
    Password,
}

/// Authenticated symmetric encryption keyed by a caller-supplied secret.
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct CryptoBox {
    config: CryptoBoxConfig,
}

impl CryptoBox {
    /// Build a box from a validated configuration.
    pub fn new(config: CryptoBoxConfig) -> Result<Self> {
        if config.derivation_iterations < 1 {
            return Err(CryptoBoxError::InvalidConfiguration(
                "derivation_iterations must be at least 1".into(),
            ));
        }
        if config.auth_key_info.is_empty() {
            return Err(CryptoBoxError::InvalidConfiguration(
                "auth_key_info must not be empty".into(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &CryptoBoxConfig {
        &self.config
    }

    /// Field widths of the blobs this box produces.
    pub fn layout(&self) -> BlobLayout {
        BlobLayout::new(self.config.cipher, self.config.mac_hash)
    }

    /// Encrypt `data` with a high-entropy `secret` (HKDF-derived key).
    ///
    /// `info` binds the ciphertext to a context; the same `info` must be
    /// passed to [`CryptoBox::decrypt`].
    pub fn encrypt(&self, data: &[u8], secret: &[u8], info: Option<&[u8]>) -> Result<Vec<u8>> {
        self.seal(data, secret, SecretKind::Key { info })
    }

    /// Decrypt a blob produced by [`CryptoBox::encrypt`].
    pub fn decrypt(&self, blob: &[u8], secret: &[u8], info: Option<&[u8]>) -> Result<Decrypted> {
        self.open(blob, secret, SecretKind::Key { info })
    }

    /// Encrypt `data` with a password (PBKDF2-derived key).
    ///
    /// Runs `derivation_iterations` PBKDF2 rounds per call.
    pub fn encrypt_with_password(&self, data: &[u8], password: &[u8]) -> Result<Vec<u8>> {
        self.seal(data, password, SecretKind::Password)
    }

    /// Decrypt a blob produced by [`CryptoBox::encrypt_with_password`].
    pub fn decrypt_with_password(&self, blob: &[u8], password: &[u8]) -> Result<Decrypted> {
        self.open(blob, password, SecretKind::Password)
    }

    /// Prepend an HMAC of `data` under `key`, using the configured MAC hash.
    pub fn hash_data(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        mac::hash_data(self.config.mac_hash, data, key)
    }

    /// Verify and strip the tag added by [`CryptoBox::hash_data`].
    pub fn verify_data(&self, data: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(mac::verify_data(self.config.mac_hash, data, key)?.map(<[u8]>::to_vec))
    }

    fn derive_encryption_key(
        &self,
        secret: &[u8],
        key_salt: &[u8],
        kind: SecretKind<'_>,
    ) -> Result<DerivedKey> {
        let key_size = self.config.cipher.key_size();
        match kind {
            SecretKind::Key { info } => {
                derive_key(self.config.kdf_hash, secret, Some(key_salt), info, key_size)
            }
            SecretKind::Password => derive_password_key(
                self.config.kdf_hash,
                secret,
                key_salt,
                self.config.derivation_iterations,
                key_size,
            ),
        }
    }

    fn derive_auth_key(&self, key: &DerivedKey) -> Result<DerivedKey> {
        key.derive_auth_key(self.config.kdf_hash, self.config.auth_key_info.as_bytes())
    }

    fn seal(&self, data: &[u8], secret: &[u8], kind: SecretKind<'_>) -> Result<Vec<u8>> {
        let cipher = self.config.cipher;
        let layout = self.layout();

        let key_salt = generate_random_bytes(cipher.key_size())?;
        let key = self.derive_encryption_key(secret, &key_salt, kind)?;

        let iv = generate_random_bytes(cipher.block_size())?;
        let encrypted = cipher.encrypt(key.as_bytes(), &iv, data)?;

        let auth_key = self.derive_auth_key(&key)?;

        let mut signed = Vec::with_capacity(iv.len() + encrypted.len());
        signed.extend_from_slice(&iv);
        signed.extend_from_slice(&encrypted);
        let tag = self.config.mac_hash.hmac(auth_key.as_bytes(), &signed)?;

        let mut blob = Vec::with_capacity(layout.sealed_len(data.len()));
        blob.extend_from_slice(&key_salt);
        blob.extend_from_slice(&tag);
        blob.extend_from_slice(&signed);

        debug!(
            cipher = %cipher,
            plaintext_len = data.len(),
            blob_len = blob.len(),
            "sealed blob"
        );
        Ok(blob)
    }

    fn open(&self, blob: &[u8], secret: &[u8], kind: SecretKind<'_>) -> Result<Decrypted> {
        let Some(parts) = self.layout().split(blob) else {
            debug!(
                blob_len = blob.len(),
                header_len = self.layout().header_len(),
                "blob too short to authenticate"
            );
            return Ok(Decrypted::AuthenticationFailed);
        };

        let key = self.derive_encryption_key(secret, parts.key_salt, kind)?;
        let auth_key = self.derive_auth_key(&key)?;

        let expected = self.config.mac_hash.hmac(auth_key.as_bytes(), parts.signed)?;
        if !constant_time_equals(&expected, parts.mac) {
            debug!(blob_len = blob.len(), "MAC mismatch");
            return Ok(Decrypted::AuthenticationFailed);
        }

        let plaintext = self
            .config
            .cipher
            .decrypt(key.as_bytes(), parts.iv, parts.payload)?;

        debug!(
            cipher = %self.config.cipher,
            plaintext_len = plaintext.len(),
            "opened blob"
        );
        Ok(Decrypted::Plaintext(plaintext))
    }
}
