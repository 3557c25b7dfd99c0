//! Construction of keyset dispatchers
//!
//! Each enabled keyset entry is turned into an ECIES primitive up front, so
//! every key and parameter problem surfaces here rather than on first use.

use std::sync::Arc;

use hcrypt_api::{Error, Result, SecureRandom};
use hcrypt_pke::{EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt};
use tracing::debug;

use crate::keyset::{KeyMaterial, Keyset};
use crate::prefix::PrefixConfig;
use crate::primitive_set::PrimitiveSet;
use crate::wrapper::{HybridDecryptWrapper, HybridEncryptWrapper};

/// Encrypt-side dispatcher over ECIES public keys
pub type KeysetHybridEncrypt = HybridEncryptWrapper<EciesAeadHkdfHybridEncrypt>;

/// Decrypt-side dispatcher over ECIES private keys
pub type KeysetHybridDecrypt = HybridDecryptWrapper<EciesAeadHkdfHybridDecrypt>;

/// Build an encrypting dispatcher from a keyset of public keys.
///
/// `rng` supplies the ephemeral keys and DEM IVs for every message.
pub fn new_hybrid_encrypt(
    keyset: &Keyset,
    rng: Arc<dyn SecureRandom>,
) -> Result<KeysetHybridEncrypt> {
    new_hybrid_encrypt_with_config(keyset, rng, PrefixConfig::default())
}

pub fn new_hybrid_encrypt_with_config(
    keyset: &Keyset,
    rng: Arc<dyn SecureRandom>,
    config: PrefixConfig,
) -> Result<KeysetHybridEncrypt> {
    debug!(keys = keyset.len(), "building hybrid encrypt");
    let set = PrimitiveSet::build(keyset, config, |entry| match &entry.material {
        KeyMaterial::Public(key) => Ok(EciesAeadHkdfHybridEncrypt::new(
            key.clone(),
            Arc::clone(&rng),
        )),
        KeyMaterial::Private(_) => Err(Error::KeyMaterialMismatch {
            key_id: entry.key_id,
            context: "encryption requires public key material",
        }),
    })?;
    Ok(HybridEncryptWrapper::new(set))
}

/// Build a decrypting dispatcher from a keyset of private keys.
pub fn new_hybrid_decrypt(keyset: &Keyset) -> Result<KeysetHybridDecrypt> {
    new_hybrid_decrypt_with_config(keyset, PrefixConfig::default())
}

pub fn new_hybrid_decrypt_with_config(
    keyset: &Keyset,
    config: PrefixConfig,
) -> Result<KeysetHybridDecrypt> {
    debug!(keys = keyset.len(), "building hybrid decrypt");
    let set = PrimitiveSet::build(keyset, config, |entry| match &entry.material {
        KeyMaterial::Private(key) => Ok(EciesAeadHkdfHybridDecrypt::new(key.clone())),
        KeyMaterial::Public(_) => Err(Error::KeyMaterialMismatch {
            key_id: entry.key_id,
            context: "decryption requires private key material",
        }),
    })?;
    Ok(HybridDecryptWrapper::new(set))
}
