//! End-to-end tests for keyset hybrid encryption

use std::sync::Arc;
use std::thread;

use hcrypt::prelude::*;
use hcrypt_tests::{init_tracing, private_key, private_keyset, seeded};

const PREFIX_TYPES: [OutputPrefixType; 3] = [
    OutputPrefixType::Tink,
    OutputPrefixType::Legacy,
    OutputPrefixType::Raw,
];

#[test]
fn test_round_trip_every_template_and_prefix() {
    init_tracing();
    for (name, params) in templates::all() {
        for prefix_type in PREFIX_TYPES {
            let keyset = private_keyset(&[(1234, params.clone(), prefix_type)]);
            let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(1)).unwrap();
            let dec = new_hybrid_decrypt(&keyset).unwrap();

            for (plaintext, context_info) in [
                (&b""[..], &b""[..]),
                (&b"plaintext"[..], &b""[..]),
                (&b"plaintext"[..], &b"context info"[..]),
            ] {
                let ct = enc.encrypt(plaintext, context_info).unwrap();
                assert_eq!(
                    dec.decrypt(&ct, context_info).unwrap(),
                    plaintext,
                    "{} {:?}",
                    name,
                    prefix_type
                );
            }
        }
    }
}

#[test]
fn test_prefix_layout() {
    let params = templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm();
    let overhead = params.ciphertext_overhead();

    let tink = private_keyset(&[(0xdeadbeef, params.clone(), OutputPrefixType::Tink)]);
    let ct = new_hybrid_encrypt(&tink.public_keyset().unwrap(), seeded(2))
        .unwrap()
        .encrypt(b"abc", b"")
        .unwrap();
    assert_eq!(&ct[..5], &[0x01, 0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(ct.len(), 5 + overhead + 3);
    // SEC1 uncompressed point follows the prefix
    assert_eq!(ct[5], 0x04);

    let legacy = private_keyset(&[(7, params.clone(), OutputPrefixType::Legacy)]);
    let ct = new_hybrid_encrypt(&legacy.public_keyset().unwrap(), seeded(3))
        .unwrap()
        .encrypt(b"abc", b"")
        .unwrap();
    assert_eq!(&ct[..5], &[0x00, 0, 0, 0, 7]);

    let raw = private_keyset(&[(7, params, OutputPrefixType::Raw)]);
    let ct = new_hybrid_encrypt(&raw.public_keyset().unwrap(), seeded(4))
        .unwrap()
        .encrypt(b"abc", b"")
        .unwrap();
    assert_eq!(ct.len(), 65 + 12 + 16 + 3);
    assert_eq!(ct[0], 0x04);
}

#[test]
fn test_non_primary_keys_decrypt() {
    let gcm = templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm();
    let ctr = templates::ecies_p256_compressed_hkdf_hmac_sha256_aes128_ctr_hmac_sha256();
    let xchacha = templates::ecies_p256_hkdf_hmac_sha256_xchacha20_poly1305();
    let p521 = templates::ecies_p521_hkdf_hmac_sha512_aes256_gcm();

    let keyset = private_keyset(&[
        (1, gcm, OutputPrefixType::Tink),
        (2, ctr, OutputPrefixType::Raw),
        (3, xchacha, OutputPrefixType::Legacy),
        (4, p521, OutputPrefixType::Raw),
    ]);
    let dec = new_hybrid_decrypt(&keyset).unwrap();

    for primary in [1, 2, 3, 4] {
        let mut rotated = keyset.public_keyset().unwrap();
        rotated.set_primary(primary);
        let enc = new_hybrid_encrypt(&rotated, seeded(u64::from(primary))).unwrap();
        let ct = enc.encrypt(b"rotated", b"ci").unwrap();
        assert_eq!(dec.decrypt(&ct, b"ci").unwrap(), b"rotated", "primary {}", primary);
    }
}

#[test]
fn test_tampering_fails_uniformly() {
    let keyset = private_keyset(&[
        (1, templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm(), OutputPrefixType::Tink),
        (
            2,
            templates::ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256(),
            OutputPrefixType::Raw,
        ),
    ]);
    let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(5)).unwrap();
    let dec = new_hybrid_decrypt(&keyset).unwrap();
    let expected = Error::DecryptionFailed {
        context: "hybrid decrypt",
    };

    let ct = enc.encrypt(b"do not touch", b"ci").unwrap();
    // Prefix, point region and final tag byte
    for i in [0, 4, 5, 6, 5 + 64, ct.len() - 1] {
        let mut tampered = ct.clone();
        tampered[i] ^= 0x01;
        assert_eq!(dec.decrypt(&tampered, b"ci").unwrap_err(), expected, "byte {}", i);
    }

    assert_eq!(dec.decrypt(&ct[..ct.len() - 1], b"ci").unwrap_err(), expected);
    assert_eq!(dec.decrypt(&[], b"ci").unwrap_err(), expected);
}

#[test]
fn test_context_binding() {
    let keyset = private_keyset(&[(
        1,
        templates::ecies_p384_hkdf_hmac_sha384_aes256_gcm(),
        OutputPrefixType::Tink,
    )]);
    let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(6)).unwrap();
    let dec = new_hybrid_decrypt(&keyset).unwrap();

    let ct = enc.encrypt(b"message", b"context A").unwrap();
    assert!(dec.decrypt(&ct, b"context B").is_err());
    assert!(dec.decrypt(&ct, b"").is_err());
    assert_eq!(dec.decrypt(&ct, b"context A").unwrap(), b"message");
}

#[test]
fn test_construction_errors() {
    let params = templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm();

    assert!(matches!(
        new_hybrid_decrypt(&Keyset::new(1, Vec::new())),
        Err(Error::NoPrimaryKey { .. })
    ));

    let duplicate = Keyset::new(
        5,
        vec![
            KeysetEntry::enabled(5, private_key(params.clone(), 1), OutputPrefixType::Tink),
            KeysetEntry::enabled(5, private_key(params.clone(), 2), OutputPrefixType::Raw),
        ],
    );
    assert_eq!(
        new_hybrid_decrypt(&duplicate).unwrap_err(),
        Error::DuplicateKeyId { key_id: 5 }
    );

    let private = private_keyset(&[(9, params, OutputPrefixType::Tink)]);
    assert!(matches!(
        new_hybrid_encrypt(&private, seeded(7)),
        Err(Error::KeyMaterialMismatch { key_id: 9, .. })
    ));
}

#[test]
fn test_shared_across_threads() {
    let keyset = private_keyset(&[(
        1,
        templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm(),
        OutputPrefixType::Tink,
    )]);
    let public = keyset.public_keyset().unwrap();
    let enc = Arc::new(new_hybrid_encrypt(&public, Arc::new(OsRandom)).unwrap());
    let dec = Arc::new(new_hybrid_decrypt(&keyset).unwrap());

    let handles: Vec<_> = (0..4u8)
        .map(|t| {
            let enc = Arc::clone(&enc);
            let dec = Arc::clone(&dec);
            thread::spawn(move || {
                for i in 0..10u8 {
                    let plaintext = [t, i];
                    let ct = enc.encrypt(&plaintext, &[t]).unwrap();
                    assert_eq!(dec.decrypt(&ct, &[t]).unwrap(), plaintext);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_random_source_failure_is_fatal() {
    struct Exhausted;
    impl SecureRandom for Exhausted {
        fn fill(&self, _dest: &mut [u8]) -> Result<()> {
            Err(Error::RandomSource {
                context: "Exhausted",
                message: "no entropy".to_string(),
            })
        }
    }

    let keyset = private_keyset(&[(
        1,
        templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm(),
        OutputPrefixType::Tink,
    )]);
    let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), Arc::new(Exhausted)).unwrap();
    let err = enc.encrypt(b"message", b"").unwrap_err();
    assert!(err.is_random_source(), "{:?}", err);
}

#[test]
fn test_serde_metadata() {
    let params = templates::ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256()
        .with_salt(b"salt".to_vec());
    let json = serde_json::to_string(&params).unwrap();
    let back: EciesParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);

    let keyset = private_keyset(&[(3, params, OutputPrefixType::Legacy)]);
    let info = serde_json::to_value(keyset.info()).unwrap();
    assert_eq!(info["primary_key_id"], 3);
    assert_eq!(info["keys"][0]["output_prefix_type"], "Legacy");
    assert_eq!(info["keys"][0]["status"], "Enabled");
}
