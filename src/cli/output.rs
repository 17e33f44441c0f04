//! Colored terminal output helpers.
//!
//! All user-facing messages go through these functions so we get
//! consistent styling across every command. Messages go to stderr so
//! stdout stays clean for encrypted or decrypted data.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::crypto::{BlobLayout, CipherSpec};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of cipher specs (Name, Key, Block), marking `current`.
pub fn print_ciphers_table(current: Option<CipherSpec>) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Cipher", "Key size", "Block size", ""]);

    for spec in CipherSpec::ALL {
        let marker = if Some(spec) == current { "configured" } else { "" };
        table.add_row(vec![
            spec.name().to_string(),
            format!("{} bytes", spec.key_size()),
            format!("{} bytes", spec.block_size()),
            marker.to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the offsets and lengths of each blob field.
pub fn print_layout_table(layout: &BlobLayout, payload_len: usize) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Offset", "Length"]);

    let fields = [
        ("Key salt", 0, layout.key_size),
        ("MAC", layout.key_size, layout.mac_len),
        ("IV", layout.key_size + layout.mac_len, layout.block_size),
        ("Ciphertext", layout.header_len(), payload_len),
    ];
    for (name, offset, len) in fields {
        table.add_row(vec![name.to_string(), offset.to_string(), len.to_string()]);
    }

    println!("{table}");
}
