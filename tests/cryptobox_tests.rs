//! End-to-end properties of `CryptoBox` encrypt / decrypt.

use cryptobox::crypto::{
    derive_key, CipherSpec, CryptoBox, CryptoBoxConfig, Decrypted, HashAlgorithm,
};
use cryptobox::errors::CryptoBoxError;

const SECRET: &[u8] = b"correct horse battery staple";
const FOX: &[u8] = b"the quick brown fox";

/// Default box, but with few PBKDF2 rounds so password tests stay fast.
fn test_box() -> CryptoBox {
    CryptoBox::new(CryptoBoxConfig {
        derivation_iterations: 1_000,
        ..CryptoBoxConfig::default()
    })
    .expect("valid config")
}

fn open(cb: &CryptoBox, blob: &[u8], secret: &[u8], info: Option<&[u8]>) -> Decrypted {
    cb.decrypt(blob, secret, info).expect("no hard error")
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn quick_brown_fox_roundtrip_and_length() {
    let cb = test_box();
    assert_eq!(cb.config().cipher, CipherSpec::Aes128Cbc);

    let blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");

    // 16 salt + 32 SHA-256 MAC + 16 IV + 19 bytes padded to 32.
    assert_eq!(blob.len(), 16 + 32 + 16 + 32);
    assert_eq!(open(&cb, &blob, SECRET, None), Decrypted::Plaintext(FOX.to_vec()));
}

#[test]
fn empty_plaintext_roundtrips() {
    let cb = test_box();
    let blob = cb.encrypt(b"", SECRET, None).expect("encrypt");

    assert_eq!(blob.len(), 16 + 32 + 16 + 16);
    assert_eq!(open(&cb, &blob, SECRET, None), Decrypted::Plaintext(Vec::new()));
}

#[test]
fn roundtrip_across_sizes_and_ciphers() {
    for cipher in CipherSpec::ALL {
        for mac_hash in HashAlgorithm::ALL {
            let cb = CryptoBox::new(CryptoBoxConfig {
                cipher,
                mac_hash,
                kdf_hash: HashAlgorithm::Sha512,
                ..CryptoBoxConfig::default()
            })
            .expect("config");

            for len in [0usize, 1, 15, 16, 17, 255, 4096] {
                let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
                let blob = cb.encrypt(&data, SECRET, Some(b"ctx")).expect("encrypt");
                assert_eq!(blob.len(), cb.layout().sealed_len(len));

                let out = open(&cb, &blob, SECRET, Some(b"ctx")).into_plaintext();
                assert_eq!(out.as_deref(), Some(data.as_slice()), "{cipher}/{mac_hash}/{len}");
            }
        }
    }
}

#[test]
fn empty_secret_still_roundtrips() {
    let cb = test_box();
    let blob = cb.encrypt(FOX, b"", None).expect("encrypt");
    assert!(open(&cb, &blob, b"", None).is_authentic());
    assert!(!open(&cb, &blob, b"x", None).is_authentic());
}

#[test]
fn password_mode_roundtrip() {
    let cb = test_box();
    let blob = cb.encrypt_with_password(FOX, b"hunter2").expect("encrypt");

    assert_eq!(blob.len(), cb.layout().sealed_len(FOX.len()));
    assert_eq!(
        cb.decrypt_with_password(&blob, b"hunter2").expect("decrypt"),
        Decrypted::Plaintext(FOX.to_vec())
    );
}

#[test]
fn password_mode_wrong_password_fails_authentication() {
    let cb = test_box();
    let blob = cb.encrypt_with_password(FOX, b"hunter2").expect("encrypt");

    assert_eq!(
        cb.decrypt_with_password(&blob, b"hunter3").expect("decrypt"),
        Decrypted::AuthenticationFailed
    );
}

// ---------------------------------------------------------------------------
// Authentication failures
// ---------------------------------------------------------------------------

#[test]
fn any_single_bit_flip_after_salt_is_detected() {
    let cb = test_box();
    let blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");
    let salt_len = cb.layout().key_size;

    for byte in salt_len..blob.len() {
        for bit in 0..8 {
            let mut tampered = blob.clone();
            tampered[byte] ^= 1 << bit;
            assert_eq!(
                open(&cb, &tampered, SECRET, None),
                Decrypted::AuthenticationFailed,
                "flip of bit {bit} in byte {byte} must be detected"
            );
        }
    }
}

#[test]
fn flipping_the_key_salt_is_detected() {
    let cb = test_box();
    let mut blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");
    blob[0] ^= 0x01;

    assert_eq!(open(&cb, &blob, SECRET, None), Decrypted::AuthenticationFailed);
}

#[test]
fn wrong_secret_fails_authentication() {
    let cb = test_box();
    let blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");

    assert_eq!(
        open(&cb, &blob, b"incorrect horse battery staple", None),
        Decrypted::AuthenticationFailed
    );
}

#[test]
fn mismatched_info_fails_authentication() {
    let cb = test_box();
    let blob = cb.encrypt(FOX, SECRET, Some(b"user:42")).expect("encrypt");

    assert_eq!(open(&cb, &blob, SECRET, Some(b"user:43")), Decrypted::AuthenticationFailed);
    assert_eq!(open(&cb, &blob, SECRET, None), Decrypted::AuthenticationFailed);
    assert!(open(&cb, &blob, SECRET, Some(b"user:42")).is_authentic());
}

#[test]
fn truncated_blobs_fail_authentication() {
    let cb = test_box();
    let blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");

    for len in [0, 1, 16, 48, 63, 64, blob.len() - 16, blob.len() - 1] {
        assert_eq!(
            open(&cb, &blob[..len], SECRET, None),
            Decrypted::AuthenticationFailed,
            "truncation to {len} bytes"
        );
    }
}

#[test]
fn different_auth_label_fails_authentication() {
    let cb = test_box();
    let other = CryptoBox::new(CryptoBoxConfig {
        auth_key_info: "SomeOtherKey".into(),
        ..cb.config().clone()
    })
    .expect("config");

    let blob = cb.encrypt(FOX, SECRET, None).expect("encrypt");
    assert_eq!(open(&other, &blob, SECRET, None), Decrypted::AuthenticationFailed);
}

// ---------------------------------------------------------------------------
// Cipher errors behind a valid MAC
// ---------------------------------------------------------------------------

/// Seal `payload` by hand under the default layout with a correct MAC, so
/// only the cipher can reject it.
fn authentic_blob(payload: &[u8]) -> Vec<u8> {
    let hash = HashAlgorithm::Sha256;
    let key_salt = [1u8; 16];
    let iv = [2u8; 16];

    let key = derive_key(hash, SECRET, Some(&key_salt), None, 16).expect("key");
    let auth_key = key.derive_auth_key(hash, b"AuthorizationKey").expect("auth key");

    let mut signed = iv.to_vec();
    signed.extend_from_slice(payload);
    let tag = hash.hmac(auth_key.as_bytes(), &signed).expect("tag");

    let mut blob = key_salt.to_vec();
    blob.extend_from_slice(&tag);
    blob.extend_from_slice(&signed);
    blob
}

#[test]
fn unaligned_ciphertext_with_valid_mac_is_a_decryption_error() {
    let cb = test_box();
    let blob = authentic_blob(&[0xAB; 15]);

    let result = cb.decrypt(&blob, SECRET, None);
    assert!(
        matches!(result, Err(CryptoBoxError::DecryptionFailed(_))),
        "expected DecryptionFailed, got {result:?}"
    );
}

#[test]
fn empty_ciphertext_with_valid_mac_is_a_decryption_error() {
    let cb = test_box();
    let blob = authentic_blob(&[]);

    assert!(matches!(
        cb.decrypt(&blob, SECRET, None),
        Err(CryptoBoxError::DecryptionFailed(_))
    ));
}

#[test]
fn wrong_secret_on_malformed_ciphertext_is_still_authentication_failure() {
    let cb = test_box();
    let blob = authentic_blob(&[0xAB; 15]);

    assert_eq!(
        open(&cb, &blob, b"some other secret", None),
        Decrypted::AuthenticationFailed
    );
}

// ---------------------------------------------------------------------------
// Freshness
// ---------------------------------------------------------------------------

#[test]
fn encrypt_is_non_deterministic() {
    let cb = test_box();
    let a = cb.encrypt(FOX, SECRET, None).expect("encrypt 1");
    let b = cb.encrypt(FOX, SECRET, None).expect("encrypt 2");

    assert_ne!(a, b, "two encryptions of the same plaintext must differ");
    assert!(open(&cb, &a, SECRET, None).is_authentic());
    assert!(open(&cb, &b, SECRET, None).is_authentic());
}

// ---------------------------------------------------------------------------
// Sharing across threads
// ---------------------------------------------------------------------------

#[test]
fn one_box_serves_many_threads() {
    let cb = std::sync::Arc::new(test_box());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cb = std::sync::Arc::clone(&cb);
            std::thread::spawn(move || {
                let data = format!("message {i}").into_bytes();
                let blob = cb.encrypt(&data, SECRET, None).expect("encrypt");
                assert_eq!(open(&cb, &blob, SECRET, None), Decrypted::Plaintext(data));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}

// ---------------------------------------------------------------------------
// hash_data / verify_data through the box
// ---------------------------------------------------------------------------

#[test]
fn box_hash_data_roundtrip() {
    let cb = test_box();
    let signed = cb.hash_data(b"cookie-value", b"validation key").expect("hash");

    assert_eq!(
        cb.verify_data(&signed, b"validation key").expect("verify"),
        Some(b"cookie-value".to_vec())
    );
    assert_eq!(cb.verify_data(&signed, b"other key").expect("verify"), None);
}
