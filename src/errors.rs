use thiserror::Error;

/// All errors that can occur in cryptobox.
///
/// A MAC mismatch on decrypt is deliberately absent from the library
/// surface: it is reported as [`crate::crypto::Decrypted::AuthenticationFailed`].
/// The CLI maps it to [`CryptoBoxError::AuthenticationFailed`] so it can exit
/// non-zero.
#[derive(Debug, Error)]
pub enum CryptoBoxError {
    // --- Crypto errors ---
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Authentication failed — wrong secret, wrong context, or tampered data")]
    AuthenticationFailed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Encoding errors ---
    #[error("Encoding error: {0}")]
    Encoding(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for cryptobox results.
pub type Result<T> = std::result::Result<T, CryptoBoxError>;
