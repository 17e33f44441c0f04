//! `cryptobox inspect` — show how a blob splits under the current layout.
//!
//! Nothing is decrypted; no secret is needed.

use serde::Serialize;

use crate::cli::output;
use crate::cli::{crypto_box, read_blob, Cli, InputArgs};
use crate::errors::{CryptoBoxError, Result};

/// Machine-readable layout report for `--json`.
#[derive(Debug, Serialize)]
struct LayoutReport {
    cipher: String,
    mac_hash: String,
    total_len: usize,
    key_salt_len: usize,
    mac_len: usize,
    iv_len: usize,
    ciphertext_len: usize,
    ciphertext_block_aligned: bool,
}

/// Execute the `inspect` command.
pub fn execute(cli: &Cli, source: &InputArgs, json: bool) -> Result<()> {
    let cb = crypto_box(cli)?;
    let layout = cb.layout();
    let blob = read_blob(source)?;

    let parts = layout.split(&blob).ok_or_else(|| {
        CryptoBoxError::CommandFailed(format!(
            "blob is {} bytes, shorter than the {}-byte header for {}",
            blob.len(),
            layout.header_len(),
            cb.config().cipher
        ))
    })?;

    let aligned = !parts.payload.is_empty() && parts.payload.len() % layout.block_size == 0;

    if json {
        let report = LayoutReport {
            cipher: cb.config().cipher.to_string(),
            mac_hash: cb.config().mac_hash.to_string(),
            total_len: blob.len(),
            key_salt_len: parts.key_salt.len(),
            mac_len: parts.mac.len(),
            iv_len: parts.iv.len(),
            ciphertext_len: parts.payload.len(),
            ciphertext_block_aligned: aligned,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CryptoBoxError::Encoding(format!("layout report: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    output::print_layout_table(&layout, parts.payload.len());
    if !aligned {
        output::warning(&format!(
            "Ciphertext is not a non-empty multiple of {} bytes; this blob will not decrypt.",
            layout.block_size
        ));
    }

    Ok(())
}
