//! Configuration loaded from `.cryptobox.toml`.

pub mod settings;

pub use settings::Settings;
