//! `cryptobox derive-key` — run HKDF over the secret and print the key.

use crate::cli::{decode_hex, load_settings, read_secret, Cli};
use crate::crypto::{derive_key, HashAlgorithm};
use crate::errors::Result;

/// Execute the `derive-key` command.
pub fn execute(
    cli: &Cli,
    salt: Option<&str>,
    info: Option<&str>,
    length: usize,
    hash: Option<&str>,
) -> Result<()> {
    let hash: HashAlgorithm = match hash {
        Some(name) => name.parse()?,
        None => load_settings(cli)?.kdf_hash.parse()?,
    };
    let salt = salt.map(|s| decode_hex("--salt", s)).transpose()?;

    let secret = read_secret(false)?;
    let key = derive_key(
        hash,
        secret.as_bytes(),
        salt.as_deref(),
        info.map(str::as_bytes),
        length,
    )?;

    println!("{}", hex::encode(key.as_bytes()));
    Ok(())
}
