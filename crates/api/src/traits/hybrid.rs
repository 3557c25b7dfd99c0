//! Trait definitions for hybrid (public-key) encryption.
//!
//! Implementations are secure against adaptive chosen-ciphertext attacks. In
//! addition to the plaintext, encryption takes a `context_info` parameter:
//! public data implicit from the context that is bound to the ciphertext.
//! Decryption checks the integrity of `context_info` but gives no guarantee
//! about its secrecy. The same `context_info` must be supplied on both sides;
//! it may be empty.

use std::sync::Arc;

use crate::error::Result;

/// Encryption half of a hybrid encryption scheme.
///
/// Implementors are immutable after construction and may be shared across
/// threads without synchronization.
pub trait HybridEncrypt: Send + Sync {
    /// Encrypts `plaintext`, binding `context_info` to the resulting ciphertext.
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Decryption half of a hybrid encryption scheme.
pub trait HybridDecrypt: Send + Sync {
    /// Decrypts `ciphertext`, verifying that it was bound to `context_info`.
    ///
    /// # Errors
    /// Every failure is reported as [`crate::Error::DecryptionFailed`].
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

impl<T: HybridEncrypt + ?Sized> HybridEncrypt for Box<T> {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(plaintext, context_info)
    }
}

impl<T: HybridEncrypt + ?Sized> HybridEncrypt for Arc<T> {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(plaintext, context_info)
    }
}

impl<T: HybridDecrypt + ?Sized> HybridDecrypt for Box<T> {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, context_info)
    }
}

impl<T: HybridDecrypt + ?Sized> HybridDecrypt for Arc<T> {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, context_info)
    }
}
