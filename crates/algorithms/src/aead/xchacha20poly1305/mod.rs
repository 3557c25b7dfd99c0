//! XChaCha20-Poly1305 data encapsulation
//!
//! The 192-bit nonce is large enough to draw at random for every message.
//! Output layout is `nonce(24) || ciphertext || tag(16)`.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::XNonce;
use hcrypt_api::SecureRandom;
use hcrypt_params::utils::symmetric::{
    POLY1305_TAG_SIZE, XCHACHA20_POLY1305_KEY_SIZE, XCHACHA20_POLY1305_NONCE_SIZE,
};

use crate::error::{Error, Result};

const ALGORITHM: &str = "XChaCha20-Poly1305";

#[derive(Clone)]
pub struct XChaCha20Poly1305 {
    cipher: chacha20poly1305::XChaCha20Poly1305,
}

impl XChaCha20Poly1305 {
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher =
            chacha20poly1305::XChaCha20Poly1305::new_from_slice(key).map_err(|_| Error::Length {
                context: "XChaCha20Poly1305::new",
                expected: XCHACHA20_POLY1305_KEY_SIZE,
                actual: key.len(),
            })?;
        Ok(Self { cipher })
    }

    pub fn seal(&self, plaintext: &[u8], aad: &[u8], rng: &dyn SecureRandom) -> Result<Vec<u8>> {
        let mut nonce = [0u8; XCHACHA20_POLY1305_NONCE_SIZE];
        rng.fill(&mut nonce)?;

        let sealed = self
            .cipher
            .encrypt(XNonce::from_slice(&nonce), Payload { msg: plaintext, aad })
            .map_err(|_| Error::Processing {
                operation: "XChaCha20-Poly1305 seal",
                details: "plaintext too long",
            })?;

        let mut out = Vec::with_capacity(nonce.len() + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    pub fn open(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < XCHACHA20_POLY1305_NONCE_SIZE + POLY1305_TAG_SIZE {
            return Err(Error::Authentication {
                algorithm: ALGORITHM,
            });
        }
        let (nonce, sealed) = ciphertext.split_at(XCHACHA20_POLY1305_NONCE_SIZE);

        self.cipher
            .decrypt(XNonce::from_slice(nonce), Payload { msg: sealed, aad })
            .map_err(|_| Error::Authentication {
                algorithm: ALGORITHM,
            })
    }
}
