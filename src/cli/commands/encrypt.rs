//! `cryptobox encrypt` — seal data into an authenticated blob.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::cli::output;
use crate::cli::{crypto_box, read_input, read_secret, write_output, Cli, IoArgs};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, io: &IoArgs, info: Option<&str>, password: bool) -> Result<()> {
    let cb = crypto_box(cli)?;
    let data = read_input(&io.source)?;
    let secret = read_secret(true)?;

    let blob = if password {
        cb.encrypt_with_password(&data, secret.as_bytes())?
    } else {
        cb.encrypt(&data, secret.as_bytes(), info.map(str::as_bytes))?
    };

    if io.source.binary {
        write_output(io, &blob)?;
    } else {
        let mut encoded = BASE64.encode(&blob);
        encoded.push('\n');
        write_output(io, encoded.as_bytes())?;
    }

    if let Some(path) = &io.output {
        output::success(&format!(
            "Encrypted {} bytes with {} into {path} ({} bytes)",
            data.len(),
            cb.config().cipher,
            blob.len()
        ));
        if info.is_some() {
            output::tip("Pass the same --info when decrypting.");
        }
    }

    Ok(())
}
