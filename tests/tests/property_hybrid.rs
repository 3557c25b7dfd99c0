//! Property-based tests for keyset hybrid encryption

use hcrypt::prelude::*;
use hcrypt_tests::{private_keyset, seeded};
use proptest::prelude::*;

fn prefix_type() -> impl Strategy<Value = OutputPrefixType> {
    prop_oneof![
        Just(OutputPrefixType::Tink),
        Just(OutputPrefixType::Legacy),
        Just(OutputPrefixType::Raw),
    ]
}

fn template() -> impl Strategy<Value = EciesParams> {
    let all: Vec<EciesParams> = templates::all().into_iter().map(|(_, p)| p).collect();
    prop::sample::select(all)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn roundtrip(
        params in template(),
        prefix in prefix_type(),
        key_id in any::<u32>(),
        salt in prop::collection::vec(any::<u8>(), 0..32),
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        context_info in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let keyset = private_keyset(&[(key_id, params.with_salt(salt), prefix)]);
        let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(u64::from(key_id))).unwrap();
        let dec = new_hybrid_decrypt(&keyset).unwrap();

        let ct = enc.encrypt(&plaintext, &context_info).unwrap();
        prop_assert_eq!(dec.decrypt(&ct, &context_info).unwrap(), plaintext);
    }

    #[test]
    fn any_flipped_byte_is_rejected(
        params in template(),
        prefix in prefix_type(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let keyset = private_keyset(&[(77, params, prefix)]);
        let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(77)).unwrap();
        let dec = new_hybrid_decrypt(&keyset).unwrap();

        let mut ct = enc.encrypt(&plaintext, b"ci").unwrap();
        let i = position.index(ct.len());
        ct[i] ^= flip;
        prop_assert!(
            matches!(dec.decrypt(&ct, b"ci"), Err(Error::DecryptionFailed { .. })),
            "byte {} of {}", i, ct.len()
        );
    }

    #[test]
    fn wrong_context_is_rejected(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        context_info in prop::collection::vec(any::<u8>(), 0..32),
        other in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(context_info != other);
        let keyset = private_keyset(&[(
            5,
            templates::ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256(),
            OutputPrefixType::Raw,
        )]);
        let enc = new_hybrid_encrypt(&keyset.public_keyset().unwrap(), seeded(5)).unwrap();
        let dec = new_hybrid_decrypt(&keyset).unwrap();

        let ct = enc.encrypt(&plaintext, &context_info).unwrap();
        prop_assert!(dec.decrypt(&ct, &other).is_err());
    }
}
