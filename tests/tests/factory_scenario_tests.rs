//! Two RAW keys with different point formats and salts, encrypting with the
//! primary and decrypting through the candidate search, many times over.

use hcrypt::prelude::*;
use hcrypt_tests::{private_key, seeded};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_hybrid_factory_scenario() {
    let primary_params = templates::ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256()
        .with_salt(b"some salt".to_vec());
    let raw_params = templates::ecies_p256_compressed_hkdf_hmac_sha256_aes128_ctr_hmac_sha256()
        .with_salt(b"other salt".to_vec());

    let primary_private = private_key(primary_params, 8);
    let raw_private = private_key(raw_params, 11);

    // The encrypt side uses its own key ids; RAW framing never carries them
    let public_keyset = Keyset::new(
        42,
        vec![
            KeysetEntry::enabled(42, primary_private.public_key(), OutputPrefixType::Raw),
            KeysetEntry::enabled(43, raw_private.public_key(), OutputPrefixType::Raw),
        ],
    );
    let private_keyset = Keyset::new(
        8,
        vec![
            KeysetEntry::enabled(8, primary_private, OutputPrefixType::Raw),
            KeysetEntry::enabled(11, raw_private, OutputPrefixType::Raw),
        ],
    );

    let encrypter = new_hybrid_encrypt(&public_keyset, seeded(1)).unwrap();
    let decrypter = new_hybrid_decrypt(&private_keyset).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for i in 0..1000 {
        let mut plaintext = [0u8; 20];
        let mut context_info = [0u8; 20];
        rng.fill_bytes(&mut plaintext);
        rng.fill_bytes(&mut context_info);

        let ciphertext = encrypter.encrypt(&plaintext, &context_info).unwrap();
        assert_eq!(ciphertext.len(), 65 + 16 + 16 + 20, "iteration {}", i);

        let decrypted = decrypter.decrypt(&ciphertext, &context_info).unwrap();
        assert_eq!(decrypted, plaintext, "iteration {}", i);
    }
}

#[test]
fn test_raw_key_found_in_keyset_order() {
    let raw_params = templates::ecies_p256_compressed_hkdf_hmac_sha256_aes128_ctr_hmac_sha256()
        .with_salt(b"other salt".to_vec());
    let primary_params = templates::ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256()
        .with_salt(b"some salt".to_vec());

    let primary_private = private_key(primary_params, 8);
    let raw_private = private_key(raw_params, 11);

    // Encrypt with the second key only
    let encrypter = new_hybrid_encrypt(
        &Keyset::new(
            11,
            vec![KeysetEntry::enabled(11, raw_private.public_key(), OutputPrefixType::Raw)],
        ),
        seeded(3),
    )
    .unwrap();
    let decrypter = new_hybrid_decrypt(&Keyset::new(
        8,
        vec![
            KeysetEntry::enabled(8, primary_private, OutputPrefixType::Raw),
            KeysetEntry::enabled(11, raw_private, OutputPrefixType::Raw),
        ],
    ))
    .unwrap();

    let ciphertext = encrypter.encrypt(b"for the second key", b"ci").unwrap();
    assert_eq!(ciphertext.len(), 33 + 16 + 16 + 18);
    assert_eq!(decrypter.decrypt(&ciphertext, b"ci").unwrap(), b"for the second key");
}
