//! `cryptobox ciphers` — list the allowed cipher specs.

use crate::cli::output;
use crate::cli::{load_settings, Cli};
use crate::crypto::CipherSpec;
use crate::errors::Result;

/// Execute the `ciphers` command.
///
/// A broken config or `--cipher` still lists every spec; it only loses
/// the marker on the current one, with a warning saying why.
pub fn execute(cli: &Cli) -> Result<()> {
    let current = match load_settings(cli).and_then(|s| s.cipher.parse::<CipherSpec>()) {
        Ok(cipher) => Some(cipher),
        Err(e) => {
            output::warning(&e.to_string());
            None
        }
    };
    output::print_ciphers_table(current);
    Ok(())
}
