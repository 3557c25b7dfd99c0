//! Shared fixtures for the hcrypt integration and property tests

use std::sync::Arc;

use hcrypt_api::{SecureRandom, SeededRandom};
use hcrypt_hybrid::{KeyId, Keyset, KeysetEntry, OutputPrefixType};
use hcrypt_pke::{EciesParams, EciesPrivateKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// A deterministic random source
pub fn seeded(seed: u64) -> Arc<dyn SecureRandom> {
    Arc::new(SeededRandom::new(ChaCha20Rng::seed_from_u64(seed)))
}

/// Generate a private key for `params` from a seeded generator
pub fn private_key(params: EciesParams, seed: u64) -> EciesPrivateKey {
    EciesPrivateKey::generate(params, seeded(seed).as_ref())
        .unwrap_or_else(|e| panic!("key generation failed: {}", e))
}

/// A private keyset with one enabled entry per `(id, params, prefix)`;
/// the first entry is primary
pub fn private_keyset(keys: &[(KeyId, EciesParams, OutputPrefixType)]) -> Keyset {
    let entries = keys
        .iter()
        .map(|(id, params, prefix)| {
            KeysetEntry::enabled(*id, private_key(params.clone(), u64::from(*id)), *prefix)
        })
        .collect();
    Keyset::new(keys.first().map_or(0, |k| k.0), entries)
}

/// Install a subscriber that honors `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
