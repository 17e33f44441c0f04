//! `cryptobox decrypt` — authenticate and open a blob.

use crate::cli::output;
use crate::cli::{crypto_box, read_blob, read_secret, write_output, Cli, IoArgs};
use crate::crypto::Decrypted;
use crate::errors::{CryptoBoxError, Result};

/// Execute the `decrypt` command.
///
/// An authentication failure is the normal "wrong secret or tampered"
/// outcome of the library; here it becomes an error so the process
/// exits non-zero.
pub fn execute(cli: &Cli, io: &IoArgs, info: Option<&str>, password: bool) -> Result<()> {
    let cb = crypto_box(cli)?;
    let blob = read_blob(&io.source)?;
    let secret = read_secret(false)?;

    let decrypted = if password {
        cb.decrypt_with_password(&blob, secret.as_bytes())?
    } else {
        cb.decrypt(&blob, secret.as_bytes(), info.map(str::as_bytes))?
    };

    let plaintext = match decrypted {
        Decrypted::Plaintext(data) => data,
        Decrypted::AuthenticationFailed => {
            if blob.len() < cb.layout().header_len() {
                output::warning(&format!(
                    "Input is only {} bytes; a {} blob needs at least {}.",
                    blob.len(),
                    cb.config().cipher,
                    cb.layout().header_len()
                ));
            }
            return Err(CryptoBoxError::AuthenticationFailed);
        }
    };

    write_output(io, &plaintext)?;

    if let Some(path) = &io.output {
        output::success(&format!("Decrypted {} bytes into {path}", plaintext.len()));
    }

    Ok(())
}
