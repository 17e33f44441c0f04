pub mod ciphers;
pub mod decrypt;
pub mod derive_key;
pub mod encrypt;
pub mod inspect;
pub mod random;
