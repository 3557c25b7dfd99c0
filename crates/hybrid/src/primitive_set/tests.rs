use super::*;
use crate::keyset::{KeyMaterial, KeyStatus};
use hcrypt_api::SeededRandom;
use hcrypt_pke::{templates, EciesPrivateKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn material(seed: u64) -> KeyMaterial {
    let rng = SeededRandom::new(ChaCha20Rng::seed_from_u64(seed));
    EciesPrivateKey::generate(templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm(), &rng)
        .unwrap()
        .into()
}

fn entry(key_id: KeyId, status: KeyStatus, prefix: OutputPrefixType) -> KeysetEntry {
    KeysetEntry::new(key_id, material(u64::from(key_id)), status, prefix)
}

/// Materializes every entry as its own key id
fn build(keyset: &Keyset) -> Result<PrimitiveSet<KeyId>> {
    PrimitiveSet::build(keyset, PrefixConfig::default(), |entry| Ok(entry.key_id))
}

#[test]
fn test_indexes_by_prefix_and_raw() {
    let keyset = Keyset::new(
        2,
        vec![
            entry(1, KeyStatus::Enabled, OutputPrefixType::Raw),
            entry(2, KeyStatus::Enabled, OutputPrefixType::Tink),
            entry(3, KeyStatus::Enabled, OutputPrefixType::Legacy),
            entry(4, KeyStatus::Disabled, OutputPrefixType::Raw),
            entry(5, KeyStatus::Enabled, OutputPrefixType::Raw),
        ],
    );
    let set = build(&keyset).unwrap();

    assert_eq!(set.len(), 4);
    assert_eq!(set.primary().primitive, 2);
    assert_eq!(set.primary().prefix_bytes(), &[0x01, 0, 0, 0, 2]);

    let tink: Vec<_> = set.entries_with_prefix(&[0x01, 0, 0, 0, 2]).map(|e| e.primitive).collect();
    assert_eq!(tink, vec![2]);
    let legacy: Vec<_> = set.entries_with_prefix(&[0x00, 0, 0, 0, 3]).map(|e| e.primitive).collect();
    assert_eq!(legacy, vec![3]);
    assert_eq!(set.entries_with_prefix(&[0x01, 0, 0, 0, 3]).count(), 0);
    assert_eq!(set.entries_with_prefix(&[0x01, 0, 0]).count(), 0);

    let raw: Vec<_> = set.raw_entries().map(|e| e.primitive).collect();
    assert_eq!(raw, vec![1, 5]);
}

#[test]
fn test_duplicate_key_id() {
    let keyset = Keyset::new(
        1,
        vec![
            entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            entry(1, KeyStatus::Disabled, OutputPrefixType::Raw),
        ],
    );
    assert_eq!(build(&keyset).unwrap_err(), Error::DuplicateKeyId { key_id: 1 });
}

#[test]
fn test_primary_must_exist_and_be_enabled() {
    let missing = Keyset::new(9, vec![entry(1, KeyStatus::Enabled, OutputPrefixType::Tink)]);
    assert!(matches!(build(&missing), Err(Error::NoPrimaryKey { .. })));

    let disabled = Keyset::new(
        1,
        vec![
            entry(1, KeyStatus::Disabled, OutputPrefixType::Tink),
            entry(2, KeyStatus::Enabled, OutputPrefixType::Tink),
        ],
    );
    assert!(matches!(build(&disabled), Err(Error::NoPrimaryKey { .. })));

    let unset = Keyset::without_primary(vec![entry(1, KeyStatus::Enabled, OutputPrefixType::Raw)]);
    assert!(matches!(build(&unset), Err(Error::NoPrimaryKey { .. })));
}

#[test]
fn test_empty_keyset() {
    assert!(matches!(
        build(&Keyset::new(1, Vec::new())),
        Err(Error::NoPrimaryKey { .. })
    ));
    assert!(matches!(
        build(&Keyset::default()),
        Err(Error::NoPrimaryKey { .. })
    ));
}

#[test]
fn test_materialize_error_propagates() {
    let keyset = Keyset::new(
        1,
        vec![
            entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            entry(2, KeyStatus::Enabled, OutputPrefixType::Raw),
        ],
    );
    let result: Result<PrimitiveSet<()>> =
        PrimitiveSet::build(&keyset, PrefixConfig::default(), |entry| {
            if entry.key_id == 2 {
                Err(Error::KeyMaterialMismatch {
                    key_id: 2,
                    context: "test",
                })
            } else {
                Ok(())
            }
        });
    assert_eq!(
        result.unwrap_err(),
        Error::KeyMaterialMismatch {
            key_id: 2,
            context: "test"
        }
    );
}

#[test]
fn test_disabled_entries_are_not_materialized() {
    let keyset = Keyset::new(
        1,
        vec![
            entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            entry(2, KeyStatus::Disabled, OutputPrefixType::Tink),
        ],
    );
    let mut calls = Vec::new();
    let set = PrimitiveSet::build(&keyset, PrefixConfig::default(), |entry| {
        calls.push(entry.key_id);
        Ok(())
    })
    .unwrap();
    assert_eq!(calls, vec![1]);
    assert_eq!(set.entries_with_prefix(&[0x01, 0, 0, 0, 2]).count(), 0);
}

#[test]
fn test_custom_prefix_config() {
    let config = PrefixConfig {
        tink_start_byte: 0x42,
        legacy_start_byte: 0x43,
    };
    let keyset = Keyset::new(
        256,
        vec![entry(256, KeyStatus::Enabled, OutputPrefixType::Legacy)],
    );
    let set = PrimitiveSet::build(&keyset, config, |entry| Ok(entry.key_id)).unwrap();
    assert_eq!(set.primary().prefix_bytes(), &[0x43, 0, 0, 1, 0]);
    assert_eq!(set.config(), &config);
}

#[test]
fn test_rejects_clashing_start_bytes() {
    let config = PrefixConfig {
        tink_start_byte: 0x00,
        legacy_start_byte: 0x00,
    };
    let keyset = Keyset::new(1, vec![entry(1, KeyStatus::Enabled, OutputPrefixType::Raw)]);
    let result = PrimitiveSet::build(&keyset, config, |entry| Ok(entry.key_id));
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}
