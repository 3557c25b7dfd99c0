//! Keyset dispatchers
//!
//! [`HybridEncryptWrapper`] always encrypts with the primary key and prepends
//! its output prefix. [`HybridDecryptWrapper`] first tries the keys whose
//! prefix matches the ciphertext, then every RAW key on the whole input.

use hcrypt_api::{Error, HybridDecrypt, HybridEncrypt, Result};
use tracing::trace;

use crate::primitive_set::PrimitiveSet;
use hcrypt_params::wire::NON_RAW_PREFIX_SIZE;

/// Encrypts with the primary entry of a primitive set
#[derive(Debug)]
pub struct HybridEncryptWrapper<P> {
    set: PrimitiveSet<P>,
}

impl<P: HybridEncrypt> HybridEncryptWrapper<P> {
    pub fn new(set: PrimitiveSet<P>) -> Self {
        Self { set }
    }

    pub fn primitive_set(&self) -> &PrimitiveSet<P> {
        &self.set
    }
}

impl<P: HybridEncrypt> HybridEncrypt for HybridEncryptWrapper<P> {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let primary = self.set.primary();
        let ciphertext = primary.primitive.encrypt(plaintext, context_info)?;

        let prefix = primary.prefix_bytes();
        if prefix.is_empty() {
            return Ok(ciphertext);
        }
        let mut out = Vec::with_capacity(prefix.len() + ciphertext.len());
        out.extend_from_slice(prefix);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }
}

/// Decrypts with whichever entry of a primitive set accepts the ciphertext
#[derive(Debug)]
pub struct HybridDecryptWrapper<P> {
    set: PrimitiveSet<P>,
}

impl<P: HybridDecrypt> HybridDecryptWrapper<P> {
    pub fn new(set: PrimitiveSet<P>) -> Self {
        Self { set }
    }

    pub fn primitive_set(&self) -> &PrimitiveSet<P> {
        &self.set
    }
}

impl<P: HybridDecrypt> HybridDecrypt for HybridDecryptWrapper<P> {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        if self.set.config().has_recognized_prefix(ciphertext) {
            let (prefix, payload) = ciphertext.split_at(NON_RAW_PREFIX_SIZE);
            for entry in self.set.entries_with_prefix(prefix) {
                if let Ok(plaintext) = entry.primitive.decrypt(payload, context_info) {
                    return Ok(plaintext);
                }
            }
            trace!("no prefixed candidate accepted the ciphertext, trying raw keys");
        }

        for entry in self.set.raw_entries() {
            if let Ok(plaintext) = entry.primitive.decrypt(ciphertext, context_info) {
                return Ok(plaintext);
            }
        }

        trace!("no candidate key accepted the ciphertext");
        Err(Error::DecryptionFailed {
            context: "hybrid decrypt",
        })
    }
}
