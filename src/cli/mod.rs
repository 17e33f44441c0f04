//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::Parser;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::CryptoBox;
use crate::errors::{CryptoBoxError, Result};

/// Environment variable consulted before prompting for the secret.
pub const SECRET_ENV_VAR: &str = "CRYPTOBOX_SECRET";

/// cryptobox CLI: authenticated symmetric encryption.
#[derive(Parser)]
#[command(
    name = "cryptobox",
    about = "Authenticated symmetric encryption (AES-CBC + HMAC, HKDF/PBKDF2 keys)",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .cryptobox.toml (default: current directory)
    #[arg(long, default_value = ".", global = true)]
    pub config_dir: String,

    /// Override the configured cipher (e.g. AES-256-CBC)
    #[arg(long, global = true)]
    pub cipher: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where data comes from.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat blobs as raw bytes instead of base64 text
    #[arg(long)]
    pub binary: bool,
}

/// Where data comes from and goes to.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt data with a secret (or a password with --password)
    Encrypt {
        #[command(flatten)]
        io: IoArgs,

        /// Context string bound into the key derivation
        #[arg(long, conflicts_with = "password")]
        info: Option<String>,

        /// Treat the secret as a human password (PBKDF2)
        #[arg(long)]
        password: bool,
    },

    /// Decrypt and authenticate a blob
    Decrypt {
        #[command(flatten)]
        io: IoArgs,

        /// Context string used when the blob was encrypted
        #[arg(long, conflicts_with = "password")]
        info: Option<String>,

        /// The blob was encrypted with --password
        #[arg(long)]
        password: bool,
    },

    /// Derive a key from the secret with HKDF and print it as hex
    DeriveKey {
        /// Salt as hex (omit for HKDF's zero salt)
        #[arg(long)]
        salt: Option<String>,

        /// Context string
        #[arg(long)]
        info: Option<String>,

        /// Output length in bytes (0 = hash length)
        #[arg(short, long, default_value = "0")]
        length: usize,

        /// Hash algorithm (default: configured kdf_hash)
        #[arg(long)]
        hash: Option<String>,
    },

    /// Generate random bytes or a random URL-safe string
    Random {
        /// Number of bytes (or characters for `string`)
        #[arg(short, long, default_value = "32")]
        length: usize,

        /// Output format: hex (default), base64 or string
        #[arg(short, long, default_value = "hex")]
        format: String,
    },

    /// List the allowed cipher specs
    Ciphers,

    /// Show how a blob splits into salt, MAC, IV and ciphertext
    Inspect {
        #[command(flatten)]
        source: InputArgs,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `--config-dir`, apply `--cipher`, and build the box.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(Path::new(&cli.config_dir))?;
    if let Some(cipher) = &cli.cipher {
        settings.cipher = cipher.clone();
    }
    Ok(settings)
}

/// Build the [`CryptoBox`] described by the CLI flags and config file.
pub fn crypto_box(cli: &Cli) -> Result<CryptoBox> {
    let settings = load_settings(cli)?;
    let cb = settings.crypto_box()?;
    debug!(
        cipher = %cb.config().cipher,
        kdf_hash = %cb.config().kdf_hash,
        mac_hash = %cb.config().mac_hash,
        "crypto box ready"
    );
    Ok(cb)
}

/// Get the secret, trying in order:
/// 1. `CRYPTOBOX_SECRET` env var (scripts/CI)
/// 2. Interactive prompt (with confirmation when `confirm` is set)
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn read_secret(confirm: bool) -> Result<Zeroizing<String>> {
    if let Ok(secret) = std::env::var(SECRET_ENV_VAR) {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Enter secret");
    if confirm {
        prompt = prompt.with_confirmation("Confirm secret", "Secrets do not match, try again");
    }
    let secret = prompt
        .interact()
        .map_err(|e| CryptoBoxError::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// Read all bytes from `--input` or stdin.
pub fn read_input(source: &InputArgs) -> Result<Vec<u8>> {
    match &source.input {
        Some(path) => fs::read(path).map_err(|e| {
            CryptoBoxError::CommandFailed(format!("failed to read {path}: {e}"))
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read a blob: raw bytes with `--binary`, base64 text otherwise.
pub fn read_blob(source: &InputArgs) -> Result<Vec<u8>> {
    let raw = read_input(source)?;
    if source.binary {
        return Ok(raw);
    }
    decode_base64(&raw)
}

/// Decode base64 text, ignoring whitespace and line breaks.
pub fn decode_base64(text: &[u8]) -> Result<Vec<u8>> {
    let compact: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    BASE64
        .decode(&compact)
        .map_err(|e| CryptoBoxError::Encoding(format!("invalid base64 input: {e}")))
}

/// Write bytes to `--output` or stdout.
pub fn write_output(io_args: &IoArgs, bytes: &[u8]) -> Result<()> {
    match &io_args.output {
        Some(path) => fs::write(path, bytes).map_err(|e| {
            CryptoBoxError::CommandFailed(format!("failed to write {path}: {e}"))
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Decode a hex string given on the command line.
pub fn decode_hex(label: &str, text: &str) -> Result<Vec<u8>> {
    hex::decode(text.trim())
        .map_err(|e| CryptoBoxError::Encoding(format!("{label} is not valid hex: {e}")))
}
