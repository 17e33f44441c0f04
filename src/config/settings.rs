use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::encryption::{DEFAULT_AUTH_KEY_INFO, DEFAULT_DERIVATION_ITERATIONS};
use crate::crypto::{CipherSpec, CryptoBox, CryptoBoxConfig, HashAlgorithm};
use crate::errors::{CryptoBoxError, Result};

/// Crypto configuration, loaded from `.cryptobox.toml`.
///
/// Every field has a sensible default so cryptobox works out-of-the-box
/// without any config file at all. Names are kept as strings here and
/// validated when the [`CryptoBox`] is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Cipher spec name (default: AES-128-CBC).
    #[serde(default = "default_cipher")]
    pub cipher: String,

    /// Hash for HKDF / PBKDF2 (default: sha256).
    #[serde(default = "default_hash")]
    pub kdf_hash: String,

    /// Hash for the HMAC tag (default: sha256).
    #[serde(default = "default_hash")]
    pub mac_hash: String,

    /// HKDF context for the authentication key.
    #[serde(default = "default_auth_key_info")]
    pub auth_key_info: String,

    /// PBKDF2 iterations for password-based encryption (default: 100 000).
    #[serde(default = "default_derivation_iterations")]
    pub derivation_iterations: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_cipher() -> String {
    CipherSpec::default().name().to_string()
}

fn default_hash() -> String {
    HashAlgorithm::default().name().to_string()
}

fn default_auth_key_info() -> String {
    DEFAULT_AUTH_KEY_INFO.to_string()
}

fn default_derivation_iterations() -> u32 {
    DEFAULT_DERIVATION_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            cipher: default_cipher(),
            kdf_hash: default_hash(),
            mac_hash: default_hash(),
            auth_key_info: default_auth_key_info(),
            derivation_iterations: default_derivation_iterations(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the config directory.
    pub const FILE_NAME: &'static str = ".cryptobox.toml";

    /// Load settings from `<config_dir>/.cryptobox.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CryptoBoxError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve names into a typed crypto configuration.
    ///
    /// Unknown cipher or hash names are configuration errors.
    pub fn crypto_config(&self) -> Result<CryptoBoxConfig> {
        Ok(CryptoBoxConfig {
            cipher: self.cipher.parse()?,
            kdf_hash: self.kdf_hash.parse()?,
            mac_hash: self.mac_hash.parse()?,
            auth_key_info: self.auth_key_info.clone(),
            derivation_iterations: self.derivation_iterations,
        })
    }

    /// Build a ready-to-use [`CryptoBox`].
    pub fn crypto_box(&self) -> Result<CryptoBox> {
        CryptoBox::new(self.crypto_config()?)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
