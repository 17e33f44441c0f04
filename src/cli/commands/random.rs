//! `cryptobox random` — print random bytes or a random token.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::{generate_random_key, generate_random_string};
use crate::errors::{CryptoBoxError, Result};

/// Execute the `random` command.
pub fn execute(length: usize, format: &str) -> Result<()> {
    let rendered = match format {
        "hex" => hex::encode(generate_random_key(length)?.as_slice()),
        "base64" => BASE64.encode(generate_random_key(length)?.as_slice()),
        "string" => generate_random_string(length)?,
        other => {
            return Err(CryptoBoxError::CommandFailed(format!(
                "unknown format '{other}' — use 'hex', 'base64' or 'string'"
            )));
        }
    };

    println!("{rendered}");
    Ok(())
}
